//! Score extraction from lint tool output

use tracing::{debug, warn};

/// Marker pylint prints before the numeric rating.
const SCORE_MARKER: &str = "Your code has been rated at ";

/// Pulls the numeric rating out of raw lint output.
///
/// Absent input, a missing marker, or a malformed number all yield
/// `None`; malformed output is never an error.
pub fn extract_score(output: Option<&str>) -> Option<f64> {
    let output = output?;
    if output.is_empty() {
        debug!("No lint output to extract a score from");
        return None;
    }

    let rest = match output.split_once(SCORE_MARKER) {
        Some((_, rest)) => rest,
        None => {
            debug!("No score found in lint output");
            return None;
        }
    };

    // The rating reads "<score>/<maximum>"; take everything up to the slash.
    let raw = match rest.find('/') {
        Some(idx) => &rest[..idx],
        None => rest,
    };

    match raw.parse::<f64>() {
        Ok(score) => {
            debug!(score, "Extracted score");
            Some(score)
        }
        Err(e) => {
            warn!("Malformed score value {:?}: {}", raw, e);
            None
        }
    }
}
