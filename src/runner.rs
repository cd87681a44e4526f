//! Lint tool invocation (blocking subprocess)

use std::process::Command;
use tracing::{debug, warn};

/// Runs the analysis tool and returns its raw text output, or `None`
/// when the invocation failed.
pub trait ScoreRunner: Send + Sync {
    fn run(&self) -> Option<String>;
}

/// Invokes a configured pylint command and captures stdout.
pub struct PylintRunner {
    command: Vec<String>,
}

impl PylintRunner {
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }
}

impl ScoreRunner for PylintRunner {
    fn run(&self) -> Option<String> {
        let (program, args) = self.command.split_first()?;
        let output = match Command::new(program).args(args).output() {
            Ok(output) => output,
            Err(e) => {
                warn!("Failed to run {}: {}", program, e);
                return None;
            }
        };
        if !output.status.success() {
            warn!("Lint command exited with {}", output.status);
            return None;
        }
        match String::from_utf8(output.stdout) {
            Ok(text) => {
                let text = text.trim().to_string();
                debug!("Lint output: {} bytes", text.len());
                Some(text)
            }
            Err(e) => {
                warn!("Lint output was not valid UTF-8: {}", e);
                None
            }
        }
    }
}

/// Expands the bare `pylint` default to cover every tracked Python
/// file, via `git ls-files '*.py'`. Falls back to plain `pylint` when
/// git is unavailable or the directory is not a repository.
pub fn default_pylint_command() -> Vec<String> {
    let mut command = vec!["pylint".to_string()];
    match Command::new("git").args(["ls-files", "*.py"]).output() {
        Ok(output) if output.status.success() => {
            let stdout = String::from_utf8_lossy(&output.stdout);
            command.extend(stdout.split_whitespace().map(str::to_string));
        }
        Ok(output) => warn!("git ls-files exited with {}", output.status),
        Err(e) => warn!("Failed to run git ls-files: {}", e),
    }
    command
}
