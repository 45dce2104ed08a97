//! Payroll settings API test implementations
//!
//! ## Test Categories
//!
//! ### Read Tests (1-3)
//! - Get Current Settings
//! - Get Default Settings
//! - Get PAYE Settings
//!
//! ### Auth Test (4)
//! - Reject Missing Token
//!
//! ### Write Tests (5-6)
//! - Update Settings
//! - Update PAYE Settings
//!
//! ### Validation Tests (7-8)
//! - Reject Invalid Tax Rate
//! - Reject Non-Contiguous Brackets
//!
//! ### Persistence Test (9)
//! - Settings Round Trip

mod round_trip;
mod write;

use anyhow::Result;

use crate::http::{HttpClient, HttpResponse};
use crate::models::{is_present, unwrap_envelope, ResponseSnapshot, TestCase};

/// API paths, relative to the configured base URL
pub mod endpoints {
    pub const CURRENT: &str = "/payroll/settings/current";
    pub const UPDATE: &str = "/payroll/settings/update";
    pub const PAYE: &str = "/payroll/settings/paye";
    pub const DEFAULT: &str = "/payroll/settings/default";
}

/// What a test case concluded, before it is recorded
#[derive(Clone, Debug, PartialEq)]
pub struct CaseOutcome {
    pub passed: bool,
    pub error: Option<String>,
    pub response: Option<ResponseSnapshot>,
}

impl CaseOutcome {
    pub fn pass(response: &HttpResponse) -> Self {
        Self {
            passed: true,
            error: None,
            response: Some(response.into()),
        }
    }

    pub fn fail(message: impl Into<String>, response: Option<&HttpResponse>) -> Self {
        Self {
            passed: false,
            error: Some(message.into()),
            response: response.map(ResponseSnapshot::from),
        }
    }
}

/// 200 with a present body
pub(crate) fn expect_ok_with_body(response: &HttpResponse) -> CaseOutcome {
    if response.status_code != 200 {
        return CaseOutcome::fail(
            format!(
                "Expected status 200, got {} {}",
                response.status_code, response.status_text
            ),
            Some(response),
        );
    }
    if !is_present(unwrap_envelope(&response.data())) {
        return CaseOutcome::fail("Response body is empty", Some(response));
    }
    CaseOutcome::pass(response)
}

/// Status must be one of `expected`
pub(crate) fn expect_status(response: &HttpResponse, expected: &[u16]) -> CaseOutcome {
    if expected.contains(&response.status_code) {
        CaseOutcome::pass(response)
    } else {
        let wanted: Vec<String> = expected.iter().map(u16::to_string).collect();
        CaseOutcome::fail(
            format!(
                "Expected status {}, got {} {}",
                wanted.join(" or "),
                response.status_code,
                response.status_text
            ),
            Some(response),
        )
    }
}

/// Run a specific test case
pub async fn run_case(test_case: TestCase, client: &HttpClient) -> Result<CaseOutcome> {
    match test_case {
        TestCase::GetCurrentSettings => read::get_current_settings(client).await,
        TestCase::GetDefaultSettings => read::get_default_settings(client).await,
        TestCase::GetPayeSettings => read::get_paye_settings(client).await,
        TestCase::MissingToken => read::missing_token(client).await,
        TestCase::UpdateSettings => write::update_settings(client).await,
        TestCase::UpdatePayeSettings => write::update_paye_settings(client).await,
        TestCase::InvalidTaxRate => validation::invalid_tax_rate(client).await,
        TestCase::BracketContinuity => validation::bracket_continuity(client).await,
        TestCase::SettingsRoundTrip => round_trip::settings_round_trip(client).await,
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn response(status_code: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status_code,
            status_text: String::new(),
            body: body.to_string(),
            duration_ms: 1,
        }
    }

    #[test]
    fn test_expect_ok_with_body() {
        assert!(expect_ok_with_body(&response(200, r#"{"payrollCycle":"monthly"}"#)).passed);

        let empty = expect_ok_with_body(&response(200, ""));
        assert!(!empty.passed);
        assert_eq!(empty.error.as_deref(), Some("Response body is empty"));

        let wrapped_empty = expect_ok_with_body(&response(200, r#"{"success":true,"data":{}}"#));
        assert!(!wrapped_empty.passed);

        let not_found = expect_ok_with_body(&response(404, r#"{"message":"nope"}"#));
        assert!(!not_found.passed);
        assert_eq!(not_found.response.unwrap().status, 404);
    }

    #[test]
    fn test_expect_status_message() {
        let outcome = expect_status(&response(200, "{}"), &[401, 403]);
        assert!(!outcome.passed);
        assert!(outcome.error.unwrap().starts_with("Expected status 401 or 403, got 200"));
        assert!(expect_status(&response(403, ""), &[401, 403]).passed);
    }
}
