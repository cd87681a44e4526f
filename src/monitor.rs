//! Main monitoring loop

use crate::config::MonitorConfig;
use crate::display;
use crate::extractor::extract_score;
use crate::history::{Sample, ScoreHistory};
use crate::improvement::{calculate_improvements, retention_horizon};
use crate::logger::ScoreLog;
use crate::runner::ScoreRunner;
use anyhow::Result;
use chrono::{DateTime, Local};
use std::time::Duration;
use tracing::{debug, error, info};

/// Outcome of one successful poll cycle.
pub struct PollOutcome {
    pub timestamp: DateTime<Local>,
    pub score: f64,
    pub improvements: Vec<(&'static str, Option<f64>)>,
}

/// Owns the score history and drives the poll/trim/compute/dispatch
/// cycle. The monitor is the sole reader and writer of its history, so
/// instances are fully independent.
pub struct Monitor {
    config: MonitorConfig,
    runner: Box<dyn ScoreRunner>,
    history: ScoreHistory,
    log: ScoreLog,
    running: bool,
}

impl Monitor {
    pub fn new(config: MonitorConfig, runner: Box<dyn ScoreRunner>) -> Self {
        let log = ScoreLog::new(config.log_file.clone());
        Self {
            config,
            runner,
            history: ScoreHistory::new(),
            log,
            running: true,
        }
    }

    pub fn history(&self) -> &ScoreHistory {
        &self.history
    }

    /// Runs one poll cycle at `now`. A failed invocation or score-less
    /// output skips the cycle entirely: no history mutation, no log
    /// line, no outcome.
    pub fn poll_once(&mut self, now: DateTime<Local>) -> Option<PollOutcome> {
        let output = self.runner.run();
        let score = extract_score(output.as_deref())?;

        self.history.push(Sample::new(now, score));
        self.history.trim(now, retention_horizon());
        let improvements = calculate_improvements(&self.history, now);

        if let Err(e) = self.log.record(now, score) {
            error!("Failed to write score log: {:#}", e);
        }

        Some(PollOutcome {
            timestamp: now,
            score,
            improvements,
        })
    }

    /// Polls at the configured interval until the iteration cap is
    /// exhausted or Ctrl-C arrives.
    pub async fn run(&mut self) -> Result<()> {
        println!("{}", display::startup_banner(self.log.path()));

        let mut interval = tokio::time::interval(Duration::from_secs(self.config.interval_secs));
        let mut iteration = 0u64;

        while self.running
            && self
                .config
                .max_iterations
                .map_or(true, |cap| iteration < cap)
        {
            tokio::select! {
                _ = interval.tick() => {
                    if let Some(outcome) = self.poll_once(Local::now()) {
                        // Repaint over the previous table.
                        print!("\x1b[2J\x1b[H");
                        println!(
                            "{}",
                            display::render_report(
                                outcome.score,
                                &outcome.improvements,
                                outcome.timestamp
                            )
                        );
                    } else {
                        debug!("No score this cycle; waiting for the next poll");
                    }
                    iteration += 1;
                }
                _ = tokio::signal::ctrl_c() => {
                    self.running = false;
                    println!("\n{}", display::stopped_message());
                }
            }
        }

        info!("Monitor loop finished after {} iterations", iteration);
        Ok(())
    }
}
