//! HTTP client module for the payroll settings API
//!
//! Provides the authenticated JSON client the test cases talk through.

mod client;

pub use client::{HttpClient, HttpError, HttpResponse};
