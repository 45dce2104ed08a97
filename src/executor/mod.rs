//! Test execution engine
//!
//! Sequential test runner and the quick connectivity check.

mod connectivity;
mod runner;

pub use connectivity::{check_connectivity, report_connectivity, Connectivity};
pub use runner::TestRunner;
