//! Time-ordered score history with bounded retention

use chrono::{DateTime, Duration, Local};
use std::collections::VecDeque;

/// One (timestamp, score) observation. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub timestamp: DateTime<Local>,
    pub score: f64,
}

impl Sample {
    pub fn new(timestamp: DateTime<Local>, score: f64) -> Self {
        Self { timestamp, score }
    }
}

/// Append-only sequence of samples, oldest first. Insertion order is
/// timestamp order: the single poll loop stamps each sample with
/// wall-clock now before pushing.
#[derive(Debug, Default)]
pub struct ScoreHistory {
    samples: VecDeque<Sample>,
}

impl ScoreHistory {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::new(),
        }
    }

    pub fn push(&mut self, sample: Sample) {
        self.samples.push_back(sample);
    }

    /// Evicts leading samples with `timestamp < now - horizon`. Must run
    /// after every push so the history stays bounded.
    pub fn trim(&mut self, now: DateTime<Local>, horizon: Duration) {
        let cutoff = now - horizon;
        while self
            .samples
            .front()
            .map_or(false, |s| s.timestamp < cutoff)
        {
            self.samples.pop_front();
        }
    }

    /// Scores with `timestamp >= now - window`, in arrival order. The
    /// cutoff is inclusive.
    pub fn scores_in_window(&self, now: DateTime<Local>, window: Duration) -> Vec<f64> {
        let start = now - window;
        self.samples
            .iter()
            .filter(|s| s.timestamp >= start)
            .map(|s| s.score)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn last_score(&self) -> Option<f64> {
        self.samples.back().map(|s| s.score)
    }
}
