//! Write tests for payroll settings
//!
//! Tests 5-6. Both leave the service holding the standard payloads.

use anyhow::Result;
use tracing::info;

use super::{endpoints, expect_ok_with_body, CaseOutcome};
use crate::http::HttpClient;
use crate::models::{PayeSettings, PayrollSettings};

/// Test 5
pub async fn update_settings(client: &HttpClient) -> Result<CaseOutcome> {
    info!("Running Update Settings Test");
    let response = client
        .put_json(endpoints::UPDATE, &PayrollSettings::standard())
        .await?;
    Ok(expect_ok_with_body(&response))
}

/// Test 6
pub async fn update_paye_settings(client: &HttpClient) -> Result<CaseOutcome> {
    info!("Running Update PAYE Settings Test");
    let response = client
        .put_json(endpoints::PAYE, &PayeSettings::standard())
        .await?;
    Ok(expect_ok_with_body(&response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::stub::StubService;
    use serde_json::json;

    #[tokio::test]
    async fn test_update_settings_stores_payload() {
        let stub = StubService::start().await;
        stub.set_current(json!({ "payrollCycle": "weekly" })).await;

        let outcome = update_settings(&stub.client()).await.unwrap();
        assert!(outcome.passed);
        assert_eq!(stub.current().await["payrollCycle"], json!("monthly"));
    }

    #[tokio::test]
    async fn test_update_paye_settings() {
        let stub = StubService::start().await;
        let outcome = update_paye_settings(&stub.client()).await.unwrap();
        assert!(outcome.passed);
        assert_eq!(stub.paye().await["personalRelief"], json!(2400.0));
    }
}
