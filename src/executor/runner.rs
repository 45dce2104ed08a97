//! Test execution runner
//!
//! Runs the selected test cases one after another, records exactly one
//! result per case and builds the final report.

use anyhow::{bail, Result};
use std::time::Duration;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::http::HttpClient;
use crate::models::{ResponseSnapshot, TestCase, TestResult};
use crate::output::Console;
use crate::results::{Report, ReportStorage};
use crate::tests::run_case;
use crate::utils::Timer;

/// Test runner for the payroll settings API
pub struct TestRunner {
    client: HttpClient,
    console: Console,
    delay: Duration,
    cases: Vec<TestCase>,
    results: Vec<TestResult>,
    passed: usize,
    failed: usize,
    elapsed: Option<Duration>,
}

impl TestRunner {
    /// Create a runner from configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        let mut client = HttpClient::new(&config.base_url, config.timeout_secs)?;
        if let Some(token) = config.token() {
            client = client.bearer_token(token)?;
        }
        Ok(Self::with_client(
            client,
            Console::new(config.colorize),
            Duration::from_millis(config.delay_ms),
        ))
    }

    pub fn with_client(client: HttpClient, console: Console, delay: Duration) -> Self {
        Self {
            client,
            console,
            delay,
            cases: TestCase::all(),
            results: Vec::new(),
            passed: 0,
            failed: 0,
            elapsed: None,
        }
    }

    /// Restrict to `only` (all when empty) minus `skip`, keeping catalogue order
    pub fn select(mut self, only: &[u8], skip: &[u8]) -> Result<Self> {
        for n in only.iter().chain(skip) {
            if TestCase::from_number(*n).is_none() {
                bail!(
                    "Invalid test number: {n} (valid: 1-{})",
                    TestCase::all().len()
                );
            }
        }

        self.cases = TestCase::all()
            .into_iter()
            .filter(|c| only.is_empty() || only.contains(&c.number()))
            .filter(|c| !skip.contains(&c.number()))
            .collect();

        if self.cases.is_empty() {
            bail!("No test cases selected");
        }
        Ok(self)
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Append a result, bump the matching counter and log it
    pub fn record_test(
        &mut self,
        name: &str,
        passed: bool,
        error: Option<String>,
        response: Option<ResponseSnapshot>,
    ) {
        let result = TestResult::new(name, passed, error, response);

        if result.passed {
            self.passed += 1;
            self.console.success(format!("{name} passed"));
        } else {
            self.failed += 1;
            let reason = result.error.as_deref().unwrap_or("no error message");
            self.console.error(format!("{name} failed: {reason}"));
        }

        self.results.push(result);
    }

    /// Run a single test case and record its result
    pub async fn run_test(&mut self, test_case: TestCase) {
        self.console.info(format!("Running {test_case}"));
        info!("Running {}", test_case);

        match run_case(test_case, &self.client).await {
            Ok(outcome) => {
                self.record_test(
                    test_case.name(),
                    outcome.passed,
                    outcome.error,
                    outcome.response,
                );
            }
            Err(e) => {
                error!("{} failed with error: {:#}", test_case, e);
                self.record_test(test_case.name(), false, Some(format!("{e:#}")), None);
            }
        }
    }

    /// Run all selected test cases sequentially
    pub async fn run_all(&mut self) {
        self.console.header(&format!(
            "Payroll Settings API Tests ({})",
            self.client.base_url()
        ));
        if !self.client.has_auth() {
            self.console
                .warning("No auth token configured; authenticated tests will likely fail");
        }

        let timer = Timer::start("test run");
        let cases = self.cases.clone();

        for (i, test_case) in cases.into_iter().enumerate() {
            if i > 0 && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            self.run_test(test_case).await;
        }

        let elapsed = timer.stop();
        info!(
            "Test run completed in {}ms - Pass: {}/{}",
            elapsed.as_millis(),
            self.passed,
            self.results.len()
        );
        self.elapsed = Some(elapsed);
    }

    /// Print the summary and, with `storage`, write the JSON report
    pub fn generate_report(&self, storage: Option<&ReportStorage>) -> Result<Report> {
        let report = Report::new(self.results.clone());

        self.console.header("Test Summary");
        self.console
            .block(&report.summary_text(&self.console, self.elapsed));

        if let Some(storage) = storage {
            match storage.save(&report) {
                Ok(path) => self
                    .console
                    .info(format!("Report saved to {}", path.display())),
                Err(e) => {
                    self.console.error(format!("Could not save report: {e:#}"));
                    return Err(e);
                }
            }
        }

        Ok(report)
    }
}
