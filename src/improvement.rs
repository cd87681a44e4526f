//! Rolling improvement deltas over fixed look-back windows

use crate::history::ScoreHistory;
use chrono::{DateTime, Duration, Local};

/// Look-back windows, shortest first. The last entry defines the
/// history retention horizon.
pub fn time_windows() -> [(&'static str, Duration); 5] {
    [
        ("5m", Duration::minutes(5)),
        ("15m", Duration::minutes(15)),
        ("1h", Duration::hours(1)),
        ("4h", Duration::hours(4)),
        ("16h", Duration::hours(16)),
    ]
}

pub fn retention_horizon() -> Duration {
    let windows = time_windows();
    windows[windows.len() - 1].1
}

/// Computes the signed score delta for every window, in table order.
///
/// Each window filters the full history independently (windows overlap,
/// they are not a partition). Pure function of the history snapshot and
/// `now`.
pub fn calculate_improvements(
    history: &ScoreHistory,
    now: DateTime<Local>,
) -> Vec<(&'static str, Option<f64>)> {
    time_windows()
        .into_iter()
        .map(|(name, window)| (name, window_improvement(history, now, window)))
        .collect()
}

/// Latest minus earliest score inside the window; `None` with fewer
/// than two samples. A plain difference, not a regression slope.
fn window_improvement(
    history: &ScoreHistory,
    now: DateTime<Local>,
    window: Duration,
) -> Option<f64> {
    let scores = history.scores_in_window(now, window);
    if scores.len() < 2 {
        return None;
    }
    match (scores.first(), scores.last()) {
        (Some(first), Some(last)) => Some(last - first),
        _ => None,
    }
}
