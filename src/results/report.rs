//! Report generation for test results

use std::fmt::Write;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::models::TestResult;
use crate::output::{Console, Severity};
use crate::utils::format_duration;

const FILE_PREFIX: &str = "payroll-settings-test-";

/// `passed / total * 100`, rounded to one decimal; 0 for an empty run
pub fn success_rate(passed: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (passed as f64 / total as f64 * 1000.0).round() / 10.0
    }
}

/// Totals block of the report
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub success_rate: f64,
}

impl ReportSummary {
    pub fn new(passed: usize, failed: usize) -> Self {
        let total = passed + failed;
        Self {
            total,
            passed,
            failed,
            success_rate: success_rate(passed, total),
        }
    }
}

/// Full run report as written to disk
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Report {
    pub timestamp: DateTime<Utc>,
    pub summary: ReportSummary,
    pub results: Vec<TestResult>,
}

impl Report {
    pub fn new(results: Vec<TestResult>) -> Self {
        Self::at(Utc::now(), results)
    }

    pub fn at(timestamp: DateTime<Utc>, results: Vec<TestResult>) -> Self {
        let passed = results.iter().filter(|r| r.passed).count();
        let failed = results.len() - passed;
        Self {
            timestamp,
            summary: ReportSummary::new(passed, failed),
            results,
        }
    }

    pub fn has_failures(&self) -> bool {
        self.summary.failed > 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &TestResult> {
        self.results.iter().filter(|r| !r.passed)
    }

    /// `payroll-settings-test-2026-10-14T09-05-07-123Z.json`
    pub fn file_name(&self) -> String {
        let stamp = self
            .timestamp
            .to_rfc3339_opts(SecondsFormat::Millis, true)
            .replace([':', '.'], "-");
        format!("{FILE_PREFIX}{stamp}.json")
    }

    /// Text summary for the console
    pub fn summary_text(&self, console: &Console, elapsed: Option<Duration>) -> String {
        let mut output = String::new();
        let summary = &self.summary;

        let _ = writeln!(output, "Total:        {}", summary.total);
        let _ = writeln!(
            output,
            "Passed:       {}",
            console.paint(Severity::Success, &summary.passed.to_string())
        );
        let failed = summary.failed.to_string();
        let _ = writeln!(
            output,
            "Failed:       {}",
            if summary.failed > 0 {
                console.paint(Severity::Error, &failed)
            } else {
                failed
            }
        );

        let rate = format!("{:.1}%", summary.success_rate);
        let rate_severity = if summary.success_rate >= 100.0 {
            Severity::Success
        } else if summary.success_rate >= 50.0 {
            Severity::Warning
        } else {
            Severity::Error
        };
        let _ = writeln!(
            output,
            "Success Rate: {}",
            console.paint(rate_severity, &rate)
        );

        if let Some(elapsed) = elapsed {
            let _ = writeln!(output, "Duration:     {}", format_duration(elapsed));
        }

        if self.has_failures() {
            let _ = writeln!(output, "\nFailed Tests:");
            for result in self.failures() {
                let _ = writeln!(
                    output,
                    "  {} {}: {}",
                    result.symbol(),
                    result.name,
                    result.error.as_deref().unwrap_or("no error message")
                );
            }
        }

        output
    }
}
