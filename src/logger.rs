//! Append-only score log file

use anyhow::{Context, Result};
use chrono::{DateTime, Local, SecondsFormat};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes one human-readable line per successful poll cycle.
pub struct ScoreLog {
    path: PathBuf,
}

impl ScoreLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `"<timestamp> - Current: <score>/10"`, creating the file
    /// on first use.
    pub fn record(&self, timestamp: DateTime<Local>, score: f64) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("failed to open log file {}", self.path.display()))?;
        writeln!(
            file,
            "{} - Current: {:.2}/10",
            timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
            score
        )?;
        Ok(())
    }
}
