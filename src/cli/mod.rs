//! CLI argument parsing
//!
//! Defines command-line interface using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::EnvConfig;

/// Integration test harness for the payroll settings API
#[derive(Parser, Debug)]
#[command(name = "payroll-settings-check")]
#[command(version)]
#[command(about = "Run the payroll settings API test suite and save a JSON report")]
#[command(long_about = None)]
#[command(after_help = format!("Environment variables:\n{}", EnvConfig::help()))]
pub struct Args {
    /// Only check that the API is reachable, then exit
    #[arg(short, long)]
    pub quick: bool,

    /// API base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Bearer token
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Configuration file (YAML or JSON)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory for the JSON report
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Pause between tests in milliseconds
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Run only these test numbers (comma-separated)
    #[arg(short, long, value_delimiter = ',', value_name = "N")]
    pub test: Vec<u8>,

    /// Skip these test numbers (comma-separated)
    #[arg(long, value_delimiter = ',', value_name = "N")]
    pub skip: Vec<u8>,

    /// List test cases and exit
    #[arg(long)]
    pub list: bool,

    /// Disable ANSI colors
    #[arg(long)]
    pub no_color: bool,

    /// Do not write the JSON report
    #[arg(long)]
    pub no_report: bool,

    /// Enable verbose diagnostic logging
    #[arg(short, long)]
    pub verbose: bool,
}
