//! Environment variable configuration
//!
//! Provides environment variable overrides for configuration.

use std::env;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "PAYROLL_TEST";

/// Environment configuration from environment variables
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnvConfig {
    /// From PAYROLL_TEST_BASE_URL
    pub base_url: Option<String>,
    /// From PAYROLL_TEST_TOKEN
    pub token: Option<String>,
    /// From PAYROLL_TEST_TIMEOUT
    pub timeout: Option<u64>,
    /// From PAYROLL_TEST_DELAY_MS
    pub delay_ms: Option<u64>,
    /// From PAYROLL_TEST_OUTPUT_DIR
    pub output_dir: Option<String>,
    /// From PAYROLL_TEST_NO_COLOR
    pub no_color: Option<bool>,
    /// From PAYROLL_TEST_CONFIG
    pub config_file: Option<String>,
    /// From PAYROLL_TEST_LOG
    pub log_level: Option<String>,
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load through an arbitrary lookup; keys are the full prefixed names
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(&format!("{ENV_PREFIX}_{name}")).filter(|v| !v.is_empty());

        Self {
            base_url: get("BASE_URL"),
            token: get("TOKEN"),
            timeout: get("TIMEOUT").and_then(|v| v.parse().ok()),
            delay_ms: get("DELAY_MS").and_then(|v| v.parse().ok()),
            output_dir: get("OUTPUT_DIR"),
            no_color: get("NO_COLOR").map(|v| parse_bool(&v)),
            config_file: get("CONFIG"),
            log_level: get("LOG"),
        }
    }

    /// Help text listing the variables
    pub fn help() -> String {
        [
            ("BASE_URL", "API base URL (default http://localhost:5000/api)"),
            ("TOKEN", "Bearer token for the Authorization header"),
            ("TIMEOUT", "Per-request timeout in seconds (default 10)"),
            ("DELAY_MS", "Pause between tests in milliseconds (default 500)"),
            ("OUTPUT_DIR", "Directory for the JSON report (default .)"),
            ("NO_COLOR", "Disable ANSI colors"),
            ("CONFIG", "Configuration file (YAML or JSON)"),
            ("LOG", "Diagnostic log level (trace, debug, info, warn, error)"),
        ]
        .iter()
        .map(|(name, text)| format!("  {ENV_PREFIX}_{name:<12} {text}"))
        .collect::<Vec<_>>()
        .join("\n")
    }
}

fn parse_bool(v: &str) -> bool {
    matches!(
        v.to_lowercase().as_str(),
        "1" | "true" | "yes" | "on" | "enabled"
    )
}
