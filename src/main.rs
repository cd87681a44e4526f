use anyhow::Result;
use clap::Parser;
use lint_monitor::{
    config::MonitorConfig,
    monitor::Monitor,
    runner::{default_pylint_command, PylintRunner},
};
use std::path::PathBuf;
use tracing::{info, warn};

/// Monitor lint quality and track improvements over time.
#[derive(Debug, Parser)]
#[command(name = "lint-monitor", version, about)]
struct Cli {
    /// The pylint command to run.
    #[arg(long = "pylint-command", num_args = 1.., value_name = "TOKEN")]
    pylint_command: Vec<String>,

    /// Maximum number of iterations to run the monitor for.
    #[arg(long)]
    max_iterations: Option<u64>,

    /// Seconds to sleep between polls.
    #[arg(long, value_name = "SECS")]
    interval: Option<u64>,

    /// Path of the score log file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Path of a TOML config file (defaults to the per-user location).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(MonitorConfig::config_path);
    let mut config = if config_path.exists() {
        MonitorConfig::load(&config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}, using defaults", e);
            MonitorConfig::default()
        })
    } else {
        MonitorConfig::default()
    };

    // CLI flags override the config file.
    if !cli.pylint_command.is_empty() {
        config.pylint_command = cli.pylint_command;
    }
    if let Some(cap) = cli.max_iterations {
        config.max_iterations = Some(cap);
    }
    if let Some(secs) = cli.interval {
        config.interval_secs = secs;
    }
    if let Some(path) = cli.log_file {
        config.log_file = path;
    }
    if config.pylint_command.is_empty() {
        config.pylint_command = default_pylint_command();
    }

    info!("Monitoring with command: {:?}", config.pylint_command);

    let runner = PylintRunner::new(config.pylint_command.clone());
    let mut monitor = Monitor::new(config, Box::new(runner));
    monitor.run().await
}
