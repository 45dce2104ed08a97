//! Test result models for payroll settings testing
//!
//! Defines the test case catalogue and the per-test result record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::http::HttpResponse;

/// The test cases, in execution order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestCase {
    // Read tests (1-3)
    GetCurrentSettings,
    GetDefaultSettings,
    GetPayeSettings,

    // Auth test (4)
    MissingToken,

    // Write tests (5-6)
    UpdateSettings,
    UpdatePayeSettings,

    // Validation tests (7-8)
    InvalidTaxRate,
    BracketContinuity,

    // Persistence test (9)
    SettingsRoundTrip,
}

impl TestCase {
    /// Get test case number (1-9)
    pub fn number(&self) -> u8 {
        match self {
            TestCase::GetCurrentSettings => 1,
            TestCase::GetDefaultSettings => 2,
            TestCase::GetPayeSettings => 3,
            TestCase::MissingToken => 4,
            TestCase::UpdateSettings => 5,
            TestCase::UpdatePayeSettings => 6,
            TestCase::InvalidTaxRate => 7,
            TestCase::BracketContinuity => 8,
            TestCase::SettingsRoundTrip => 9,
        }
    }

    /// Get test case name
    pub fn name(&self) -> &'static str {
        match self {
            TestCase::GetCurrentSettings => "Get Current Settings",
            TestCase::GetDefaultSettings => "Get Default Settings",
            TestCase::GetPayeSettings => "Get PAYE Settings",
            TestCase::MissingToken => "Reject Missing Token",
            TestCase::UpdateSettings => "Update Settings",
            TestCase::UpdatePayeSettings => "Update PAYE Settings",
            TestCase::InvalidTaxRate => "Reject Invalid Tax Rate",
            TestCase::BracketContinuity => "Reject Non-Contiguous Brackets",
            TestCase::SettingsRoundTrip => "Settings Round Trip",
        }
    }

    /// Get test category
    pub fn category(&self) -> &'static str {
        match self {
            TestCase::GetCurrentSettings
            | TestCase::GetDefaultSettings
            | TestCase::GetPayeSettings => "Read",
            TestCase::MissingToken => "Auth",
            TestCase::UpdateSettings | TestCase::UpdatePayeSettings => "Write",
            TestCase::InvalidTaxRate | TestCase::BracketContinuity => "Validation",
            TestCase::SettingsRoundTrip => "Persistence",
        }
    }

    /// Whether the case changes remote state
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            TestCase::UpdateSettings | TestCase::UpdatePayeSettings | TestCase::SettingsRoundTrip
        )
    }

    /// Get all test cases
    pub fn all() -> Vec<TestCase> {
        vec![
            TestCase::GetCurrentSettings,
            TestCase::GetDefaultSettings,
            TestCase::GetPayeSettings,
            TestCase::MissingToken,
            TestCase::UpdateSettings,
            TestCase::UpdatePayeSettings,
            TestCase::InvalidTaxRate,
            TestCase::BracketContinuity,
            TestCase::SettingsRoundTrip,
        ]
    }

    /// Parse from test number
    pub fn from_number(n: u8) -> Option<TestCase> {
        TestCase::all().into_iter().find(|c| c.number() == n)
    }
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Test {}: {}", self.number(), self.name())
    }
}

/// Response captured into a result
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseSnapshot {
    pub status: u16,
    pub status_text: String,
    pub data: Value,
}

impl From<&HttpResponse> for ResponseSnapshot {
    fn from(response: &HttpResponse) -> Self {
        Self {
            status: response.status_code,
            status_text: response.status_text.clone(),
            data: response.data(),
        }
    }
}

/// Result of a single test execution
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TestResult {
    pub name: String,
    pub timestamp: DateTime<Utc>,
    pub passed: bool,
    pub error: Option<String>,
    pub response: Option<ResponseSnapshot>,
}

impl TestResult {
    pub fn new(
        name: impl Into<String>,
        passed: bool,
        error: Option<String>,
        response: Option<ResponseSnapshot>,
    ) -> Self {
        Self {
            name: name.into(),
            timestamp: Utc::now(),
            passed,
            error,
            response,
        }
    }

    pub fn symbol(&self) -> &'static str {
        if self.passed {
            "✓"
        } else {
            "✗"
        }
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.symbol(), self.name)?;
        if let Some(response) = &self.response {
            write!(f, " [{}]", response.status)?;
        }
        if let Some(err) = &self.error {
            write!(f, " - {err}")?;
        }
        Ok(())
    }
}
