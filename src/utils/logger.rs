//! Diagnostic logging
//!
//! `tracing` output goes to stderr so it never mixes with the colored
//! progress log on stdout. Unless told otherwise only this crate's events
//! are shown; reqwest and hyper stay quiet.

use std::str::FromStr;
use tracing_subscriber::EnvFilter;

const CRATE_TARGET: &str = "payroll_settings_check";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }

    /// Directive enabling `self` for this crate only
    pub fn directive(self) -> String {
        format!("{CRATE_TARGET}={}", self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("unknown log level {s:?}")),
        }
    }
}

/// Filter directives for a `PAYROLL_TEST_LOG` value.
///
/// A bare level is scoped to this crate. A value containing `=` or `,` is
/// used verbatim as `RUST_LOG` syntax. Anything else yields `None`.
pub fn env_directives(value: &str) -> Option<String> {
    if let Ok(level) = value.parse::<LogLevel>() {
        return Some(level.directive());
    }
    let directive_syntax = value.contains('=') || value.contains(',');
    (directive_syntax && EnvFilter::try_new(value).is_ok()).then(|| value.to_string())
}

/// Install the stderr subscriber; later calls are no-ops
pub fn init_logger(directives: &str) {
    let filter = EnvFilter::try_new(directives)
        .unwrap_or_else(|_| EnvFilter::new(LogLevel::Warn.directive()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parsing() {
        assert_eq!("info".parse::<LogLevel>(), Ok(LogLevel::Info));
        assert_eq!(" DEBUG ".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_level_directive_is_crate_scoped() {
        assert_eq!(LogLevel::Debug.directive(), "payroll_settings_check=debug");
    }

    #[test]
    fn test_env_directives() {
        assert_eq!(
            env_directives("trace").as_deref(),
            Some("payroll_settings_check=trace")
        );
        assert_eq!(
            env_directives("debug,reqwest=trace").as_deref(),
            Some("debug,reqwest=trace")
        );
        assert_eq!(env_directives("verbose"), None);
        assert_eq!(env_directives(""), None);
    }
}
