//! Colored console logger
//!
//! One timestamped line per event, colored by severity.

use chrono::{DateTime, Utc};
use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// Console message severity
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Info => "\x1b[36m",
            Severity::Success => "\x1b[32m",
            Severity::Warning => "\x1b[33m",
            Severity::Error => "\x1b[31m",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Severity::Info => "ℹ",
            Severity::Success => "✓",
            Severity::Warning => "⚠",
            Severity::Error => "✗",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "INFO"),
            Severity::Success => write!(f, "SUCCESS"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// Console writer
#[derive(Clone, Copy, Debug)]
pub struct Console {
    colorize: bool,
}

impl Console {
    pub fn new(colorize: bool) -> Self {
        Self { colorize }
    }

    /// `[HH:MM:SS] ✓ message`, wrapped in the severity color when enabled
    pub fn format_line(&self, severity: Severity, at: DateTime<Utc>, message: &str) -> String {
        let line = format!("[{}] {} {}", at.format("%H:%M:%S"), severity.symbol(), message);
        self.paint(severity, &line)
    }

    pub fn paint(&self, severity: Severity, text: &str) -> String {
        if self.colorize {
            format!("{}{text}{RESET}", severity.color())
        } else {
            text.to_string()
        }
    }

    pub fn log(&self, severity: Severity, message: impl AsRef<str>) {
        println!("{}", self.format_line(severity, Utc::now(), message.as_ref()));
    }

    pub fn info(&self, message: impl AsRef<str>) {
        self.log(Severity::Info, message);
    }

    pub fn success(&self, message: impl AsRef<str>) {
        self.log(Severity::Success, message);
    }

    pub fn warning(&self, message: impl AsRef<str>) {
        self.log(Severity::Warning, message);
    }

    pub fn error(&self, message: impl AsRef<str>) {
        self.log(Severity::Error, message);
    }

    /// Framed section title
    pub fn header(&self, title: &str) {
        let rule = "━".repeat(60);
        if self.colorize {
            println!("\n{BOLD}{rule}\n  {title}\n{rule}{RESET}");
        } else {
            println!("\n{rule}\n  {title}\n{rule}");
        }
    }

    /// Raw block of text, printed as is
    pub fn block(&self, text: &str) {
        println!("{text}");
    }
}
