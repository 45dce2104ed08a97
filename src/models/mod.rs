//! Data models for payroll settings testing
//!
//! Request payloads, the test case catalogue and result records.

mod settings;
mod test_result;

pub use settings::{is_present, unwrap_envelope, PayeSettings, PayrollCycle, PayrollSettings};
pub use test_result::{ResponseSnapshot, TestCase, TestResult};
