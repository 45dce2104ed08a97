//! Configuration module
//!
//! Defaults, optional YAML/JSON file and `PAYROLL_TEST_*` environment
//! overrides. Command-line flags are applied last by `main`.

mod env;

pub use env::EnvConfig;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration file locations, first match wins
const CONFIG_LOCATIONS: &[&str] = &[
    "./payroll-settings-check.yaml",
    "./payroll-settings-check.yml",
    "./payroll-settings-check.json",
    "./.payroll-settings-check.yaml",
];

/// Application configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// API base URL, e.g. `http://localhost:5000/api`
    pub base_url: String,

    /// Bearer token sent with every request
    pub auth_token: Option<String>,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Pause between consecutive tests in milliseconds
    pub delay_ms: u64,

    /// Directory receiving the JSON report
    pub output_dir: PathBuf,

    /// ANSI colors on the console
    pub colorize: bool,

    /// Write the JSON report at the end of a run
    pub save_report: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
            auth_token: None,
            timeout_secs: 10,
            delay_ms: 500,
            output_dir: PathBuf::from("."),
            colorize: true,
            save_report: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Self = if is_yaml(path) {
            serde_yaml::from_str(&content).context("Failed to parse YAML config")?
        } else {
            serde_json::from_str(&content).context("Failed to parse JSON config")?
        };

        Ok(config)
    }

    /// Find configuration file in standard locations
    pub fn find() -> Option<PathBuf> {
        CONFIG_LOCATIONS
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Overlay values present in the environment
    pub fn apply_env(&mut self, env: &EnvConfig) {
        if let Some(url) = &env.base_url {
            self.base_url = url.clone();
        }
        if let Some(token) = &env.token {
            self.auth_token = Some(token.clone());
        }
        if let Some(timeout) = env.timeout {
            self.timeout_secs = timeout;
        }
        if let Some(delay) = env.delay_ms {
            self.delay_ms = delay;
        }
        if let Some(dir) = &env.output_dir {
            self.output_dir = PathBuf::from(dir);
        }
        if env.no_color == Some(true) {
            self.colorize = false;
        }
    }

    /// Token, ignoring empty strings
    pub fn token(&self) -> Option<&str> {
        self.auth_token.as_deref().filter(|t| !t.trim().is_empty())
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            bail!(
                "Base URL must start with http:// or https://, got '{}'",
                self.base_url
            );
        }
        if self.timeout_secs == 0 {
            bail!("Timeout must be at least 1 second");
        }
        Ok(())
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .map(|e| e == "yaml" || e == "yml")
        .unwrap_or(false)
}
