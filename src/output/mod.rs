//! Console output
//!
//! Severity-colored progress log for interactive runs.

mod console;

pub use console::{Console, Severity};
