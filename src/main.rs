//! Payroll Settings Check - integration test harness for the payroll settings API
//!
//! Runs a fixed, ordered suite of HTTP tests against a payroll service,
//! prints a colored progress log and saves a JSON report.
//!
//! ## Features
//!
//! - 9 test cases covering reads, writes, server-side validation and a
//!   settings round trip
//! - Bearer-token authentication, configurable base URL and timeouts
//! - Quick connectivity check with remediation hints
//! - Timestamped JSON report (`payroll-settings-test-<timestamp>.json`)
//!
//! ## Usage
//!
//! ```bash
//! # Check the API is reachable
//! payroll-settings-check --quick
//!
//! # Run the full suite
//! PAYROLL_TEST_TOKEN=... payroll-settings-check --base-url http://localhost:5000/api
//!
//! # Run only the validation tests, without the inter-test pause
//! payroll-settings-check --test 7,8 --delay-ms 0
//! ```

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info, warn};

mod cli;
mod config;
mod executor;
mod http;
mod models;
mod output;
mod results;
mod tests;
mod utils;

use cli::Args;
use config::{AppConfig, EnvConfig};
use executor::{check_connectivity, report_connectivity, TestRunner};
use models::TestCase;
use output::Console;
use results::ReportStorage;
use utils::{env_directives, init_logger, LogLevel};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let env = EnvConfig::load();

    let (directives, rejected) = log_directives(&args, &env);
    init_logger(&directives);
    if let Some(value) = rejected {
        warn!("Unrecognised PAYROLL_TEST_LOG value {:?}, using warn", value);
    }

    run(&args, &env).await
}

async fn run(args: &Args, env: &EnvConfig) -> Result<ExitCode> {
    if args.list {
        list_tests();
        return Ok(ExitCode::SUCCESS);
    }

    let config = build_config(args, env)?;
    let console = Console::new(config.colorize);
    let runner = TestRunner::new(&config)?;

    if args.quick {
        let connectivity = check_connectivity(runner.client()).await;
        report_connectivity(&console, runner.client(), &connectivity);
        return Ok(if connectivity.is_reachable() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let mut runner = runner.select(&args.test, &args.skip)?;
    info!(
        "Running {} test cases against {}",
        runner.cases().len(),
        config.base_url
    );
    runner.run_all().await;
    info!(
        "Completed {} tests: {} passed, {} failed",
        runner.results().len(),
        runner.passed(),
        runner.failed()
    );

    let storage = config
        .save_report
        .then(|| ReportStorage::new(&config.output_dir));
    let report = runner.generate_report(storage.as_ref())?;

    Ok(if report.has_failures() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Filter directives, plus the `PAYROLL_TEST_LOG` value if it was not understood
fn log_directives(args: &Args, env: &EnvConfig) -> (String, Option<String>) {
    if args.verbose {
        return (LogLevel::Debug.directive(), None);
    }
    match env.log_level.as_deref() {
        None => (LogLevel::Warn.directive(), None),
        Some(value) => match env_directives(value) {
            Some(directives) => (directives, None),
            None => (LogLevel::Warn.directive(), Some(value.to_string())),
        },
    }
}

/// Defaults < config file < environment < command line
fn build_config(args: &Args, env: &EnvConfig) -> Result<AppConfig> {
    let path = args
        .config
        .clone()
        .or_else(|| env.config_file.as_ref().map(PathBuf::from))
        .or_else(AppConfig::find);

    let mut config = match path {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            AppConfig::load(&path)?
        }
        None => AppConfig::default(),
    };

    config.apply_env(env);

    if let Some(url) = &args.base_url {
        config.base_url = url.clone();
    }
    if let Some(token) = &args.token {
        config.auth_token = Some(token.clone());
    }
    if let Some(timeout) = args.timeout {
        config.timeout_secs = timeout;
    }
    if let Some(delay) = args.delay_ms {
        config.delay_ms = delay;
    }
    if let Some(dir) = &args.output_dir {
        config.output_dir = dir.clone();
    }
    if args.no_color {
        config.colorize = false;
    }
    if args.no_report {
        config.save_report = false;
    }

    config.validate()?;
    Ok(config)
}

fn list_tests() {
    println!("\nPayroll Settings API Test Cases ({} total)\n", TestCase::all().len());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let mut current_category = "";

    for test_case in TestCase::all() {
        let category = test_case.category();
        if category != current_category {
            println!("\n{category} Tests:");
            println!("────────────────────────────────────────────────────────────");
            current_category = category;
        }

        let marker = if test_case.mutates() {
            "  [modifies settings]"
        } else {
            ""
        };
        println!("  {}. {}{}", test_case.number(), test_case.name(), marker);
    }

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
}
