//! Configuration management (TOML)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Lint command tokens. Empty means "resolve the pylint default at
    /// startup" (pylint over every git-tracked Python file).
    #[serde(default)]
    pub pylint_command: Vec<String>,
    /// Poll cycle cap; `None` runs until interrupted.
    #[serde(default)]
    pub max_iterations: Option<u64>,
    /// Seconds to sleep between polls.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
    /// Destination of the per-cycle score log.
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
}

fn default_interval_secs() -> u64 {
    60
}

fn default_log_file() -> PathBuf {
    PathBuf::from("pylint_monitor.log")
}

impl Default for MonitorConfig {
    fn default() -> Self {
        MonitorConfig {
            pylint_command: Vec::new(),
            max_iterations: None,
            interval_secs: default_interval_secs(),
            log_file: default_log_file(),
        }
    }
}

impl MonitorConfig {
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: MonitorConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "lint-monitor")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
