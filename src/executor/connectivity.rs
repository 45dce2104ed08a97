//! Quick connectivity check
//!
//! One request against the current-settings endpoint. Any HTTP answer
//! means the service is reachable.

use tracing::debug;

use crate::http::{HttpClient, HttpError};
use crate::output::Console;
use crate::tests::endpoints;

/// Outcome of the connectivity probe
#[derive(Clone, Debug, PartialEq)]
pub enum Connectivity {
    Reachable {
        status: u16,
        status_text: String,
        duration_ms: u64,
    },
    /// Refused, timed out or not a usable URL
    Unreachable {
        reason: String,
    },
    /// Connected, but the exchange broke down
    Failed {
        reason: String,
    },
}

impl Connectivity {
    pub fn is_reachable(&self) -> bool {
        matches!(self, Connectivity::Reachable { .. })
    }
}

pub async fn check_connectivity(client: &HttpClient) -> Connectivity {
    match client.get(endpoints::CURRENT).await {
        Ok(response) => Connectivity::Reachable {
            status: response.status_code,
            status_text: response.status_text,
            duration_ms: response.duration_ms,
        },
        Err(e) => {
            debug!("Connectivity probe failed: {:#}", e);
            let reason = e.to_string();
            let unreachable = e
                .downcast_ref::<HttpError>()
                .is_some_and(HttpError::is_unreachable);
            if unreachable {
                Connectivity::Unreachable { reason }
            } else {
                Connectivity::Failed { reason }
            }
        }
    }
}

/// Print the probe outcome with hints matching the kind of failure
pub fn report_connectivity(console: &Console, client: &HttpClient, connectivity: &Connectivity) {
    match connectivity {
        Connectivity::Reachable {
            status,
            status_text,
            duration_ms,
        } => {
            console.success(format!(
                "API reachable at {} ({} {}, {}ms)",
                client.base_url(),
                status,
                status_text,
                duration_ms
            ));
            if *status == 401 || *status == 403 {
                console.warning("The service rejected the token; check PAYROLL_TEST_TOKEN");
            } else if !client.has_auth() {
                console.warning("No auth token configured");
            }
        }
        Connectivity::Unreachable { reason } => {
            console.error(format!("Cannot reach API at {}: {}", client.base_url(), reason));
            console.info("Make sure the payroll service is running");
            console.info("Check the base URL (--base-url or PAYROLL_TEST_BASE_URL)");
            console.info("Check network access and firewall rules for that host");
        }
        Connectivity::Failed { reason } => {
            console.error(format!("Request to {} failed: {}", client.base_url(), reason));
            console.info("The service accepted the connection but the exchange did not complete");
            console.info("Rerun with -v to see request details");
        }
    }
}
