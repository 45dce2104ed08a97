//! Run report and its persistence
//!
//! Builds the end-of-run report, renders its text summary and writes it
//! to disk as JSON.

mod report;
mod storage;

pub use report::Report;
pub use storage::ReportStorage;
