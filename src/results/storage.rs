//! Results storage
//!
//! Writes run reports as pretty-printed JSON files.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::{debug, info};

use super::Report;

/// Directory that receives report files
#[derive(Clone, Debug)]
pub struct ReportStorage {
    dir: PathBuf,
}

impl ReportStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Save `report` under its timestamped name and return the path
    pub fn save(&self, report: &Report) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).with_context(|| {
            format!("Failed to create report directory {}", self.dir.display())
        })?;

        let path = self.dir.join(report.file_name());
        debug!("Writing report to {}", path.display());

        let file = File::create(&path)
            .with_context(|| format!("Failed to create report file {}", path.display()))?;
        write_report(BufWriter::new(file), report)
            .with_context(|| format!("Failed to write report {}", path.display()))?;

        info!("Report saved: {}", path.display());
        Ok(path)
    }
}

/// Serialize and flush; a buffered write error surfaces here, not on drop
fn write_report<W: Write>(mut writer: W, report: &Report) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, report).context("Failed to serialize report")?;
    writer.flush().context("Failed to flush report")?;
    Ok(())
}
