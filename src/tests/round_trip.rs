//! Settings round trip
//!
//! Test 9: get, switch the payroll cycle to bi-weekly, re-fetch, restore.
//! A failed restore is not reported and may leave the service altered.

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, info};

use super::{endpoints, CaseOutcome};
use crate::http::HttpClient;
use crate::models::{unwrap_envelope, PayrollCycle};

const TARGET_CYCLE: PayrollCycle = PayrollCycle::BiWeekly;

/// Test 9
pub async fn settings_round_trip(client: &HttpClient) -> Result<CaseOutcome> {
    info!("Running Settings Round Trip Test");

    let initial = client.get(endpoints::CURRENT).await?;
    if initial.status_code != 200 {
        return Ok(CaseOutcome::fail(
            format!("Could not read current settings: {}", initial.status_code),
            Some(&initial),
        ));
    }

    let original = unwrap_envelope(&initial.data()).clone();
    let mutated = with_payroll_cycle(&original, TARGET_CYCLE)?;

    let update = client.put_json(endpoints::UPDATE, &mutated).await?;
    if !update.is_success() {
        return Ok(CaseOutcome::fail(
            format!("Update rejected: {} {}", update.status_code, update.status_text),
            Some(&update),
        ));
    }

    let verification = verify_cycle(client).await;
    restore(client, &original).await;
    verification
}

/// Re-fetch and compare the payroll cycle
async fn verify_cycle(client: &HttpClient) -> Result<CaseOutcome> {
    let response = client.get(endpoints::CURRENT).await?;
    let data = response.data();
    let observed = unwrap_envelope(&data)
        .get("payrollCycle")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    if observed == TARGET_CYCLE.as_str() {
        Ok(CaseOutcome::pass(&response))
    } else {
        Ok(CaseOutcome::fail(
            format!(
                "Expected payrollCycle '{}', got '{}'",
                TARGET_CYCLE.as_str(),
                observed
            ),
            Some(&response),
        ))
    }
}

/// Put the original settings back; the outcome is intentionally dropped
async fn restore(client: &HttpClient, original: &Value) {
    match client.put_json(endpoints::UPDATE, original).await {
        Ok(response) if response.is_success() => debug!("Original settings restored"),
        Ok(response) => debug!("Restore returned {}", response.status_code),
        Err(e) => debug!("Restore failed: {}", e),
    }
}

fn with_payroll_cycle(settings: &Value, cycle: PayrollCycle) -> Result<Value> {
    let mut mutated = settings.clone();
    let object = mutated
        .as_object_mut()
        .context("Current settings are not a JSON object")?;
    object.insert(
        "payrollCycle".to_string(),
        Value::String(cycle.as_str().to_string()),
    );
    Ok(mutated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::stub::StubService;
    use serde_json::json;

    #[test]
    fn test_with_payroll_cycle_keeps_other_fields() {
        let settings = json!({ "payrollCycle": "monthly", "customField": 7 });
        let mutated = with_payroll_cycle(&settings, PayrollCycle::BiWeekly).unwrap();
        assert_eq!(mutated["payrollCycle"], json!("bi-weekly"));
        assert_eq!(mutated["customField"], json!(7));
        assert!(with_payroll_cycle(&json!([1, 2]), PayrollCycle::Weekly).is_err());
    }

    #[tokio::test]
    async fn test_round_trip_restores_original() {
        let stub = StubService::start().await;
        let original = json!({ "payrollCycle": "monthly", "reliefs": { "personalRelief": 2400 } });
        stub.set_current(original.clone()).await;

        let outcome = settings_round_trip(&stub.client()).await.unwrap();

        assert!(outcome.passed, "{:?}", outcome.error);
        assert_eq!(stub.current().await, original);
        assert!(stub
            .updates()
            .await
            .iter()
            .any(|u| u["payrollCycle"] == json!("bi-weekly")));
    }

    #[tokio::test]
    async fn test_round_trip_fails_when_update_not_persisted() {
        let stub = StubService::start().await;
        stub.ignore_updates().await;

        let outcome = settings_round_trip(&stub.client()).await.unwrap();
        assert!(!outcome.passed);
        assert_eq!(
            outcome.error.as_deref(),
            Some("Expected payrollCycle 'bi-weekly', got 'monthly'")
        );
    }

    #[tokio::test]
    async fn test_round_trip_swallows_restore_failure() {
        let stub = StubService::start().await;
        stub.fail_updates_after(1).await;

        let outcome = settings_round_trip(&stub.client()).await.unwrap();

        assert!(outcome.passed);
        assert_eq!(stub.current().await["payrollCycle"], json!("bi-weekly"));
    }
}
