use chrono::{Duration, Local};
use lint_monitor::history::{Sample, ScoreHistory};

#[test]
fn test_push_appends_in_order() {
    let now = Local::now();
    let mut history = ScoreHistory::new();
    assert!(history.is_empty());

    history.push(Sample::new(now - Duration::minutes(2), 7.0));
    history.push(Sample::new(now - Duration::minutes(1), 8.0));
    history.push(Sample::new(now, 9.0));

    assert_eq!(history.len(), 3);
    assert_eq!(history.last_score(), Some(9.0));
    assert_eq!(
        history.scores_in_window(now, Duration::hours(1)),
        vec![7.0, 8.0, 9.0]
    );
}

#[test]
fn test_trim_evicts_samples_past_horizon() {
    let now = Local::now();
    let mut history = ScoreHistory::new();
    history.push(Sample::new(now - Duration::hours(17), 5.0));
    history.push(Sample::new(now - Duration::hours(1), 7.0));
    history.push(Sample::new(now, 9.0));

    history.trim(now, Duration::hours(16));

    assert_eq!(history.len(), 2);
    assert_eq!(
        history.scores_in_window(now, Duration::hours(16)),
        vec![7.0, 9.0]
    );
}

#[test]
fn test_trim_keeps_sample_exactly_on_horizon() {
    let now = Local::now();
    let mut history = ScoreHistory::new();
    history.push(Sample::new(now - Duration::hours(16), 6.0));
    history.push(Sample::new(now, 9.0));

    history.trim(now, Duration::hours(16));

    // Eviction is strict: only timestamps older than the cutoff go.
    assert_eq!(history.len(), 2);
}

#[test]
fn test_trim_empty_history_is_noop() {
    let now = Local::now();
    let mut history = ScoreHistory::new();
    history.trim(now, Duration::hours(16));
    assert!(history.is_empty());
}

#[test]
fn test_scores_in_window_cutoff_is_inclusive() {
    let now = Local::now();
    let mut history = ScoreHistory::new();
    history.push(Sample::new(now - Duration::minutes(5), 8.0));
    history.push(Sample::new(now, 9.0));

    assert_eq!(
        history.scores_in_window(now, Duration::minutes(5)),
        vec![8.0, 9.0]
    );
}

#[test]
fn test_scores_in_window_excludes_older_samples() {
    let now = Local::now();
    let mut history = ScoreHistory::new();
    history.push(Sample::new(now - Duration::minutes(20), 6.0));
    history.push(Sample::new(now - Duration::minutes(3), 8.0));
    history.push(Sample::new(now, 9.0));

    assert_eq!(
        history.scores_in_window(now, Duration::minutes(5)),
        vec![8.0, 9.0]
    );
    assert_eq!(
        history.scores_in_window(now, Duration::minutes(15)),
        vec![8.0, 9.0]
    );
    assert_eq!(
        history.scores_in_window(now, Duration::hours(1)),
        vec![6.0, 8.0, 9.0]
    );
}
