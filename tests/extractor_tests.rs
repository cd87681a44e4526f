use lint_monitor::extractor::extract_score;

#[test]
fn test_extract_score_success() {
    let output = "Your code has been rated at 9.50/10";
    assert_eq!(extract_score(Some(output)), Some(9.5));
}

#[test]
fn test_extract_score_with_preamble() {
    let output = "************* Module foo\n\
                  foo.py:1:0: C0114: Missing module docstring (missing-module-docstring)\n\n\
                  ------------------------------------------------------------------\n\
                  Your code has been rated at 7.25/10 (previous run: 7.00/10, +0.25)";
    assert_eq!(extract_score(Some(output)), Some(7.25));
}

#[test]
fn test_extract_score_negative_rating() {
    // pylint ratings can go below zero on very noisy code.
    let output = "Your code has been rated at -2.50/10";
    assert_eq!(extract_score(Some(output)), Some(-2.5));
}

#[test]
fn test_extract_score_invalid_format() {
    assert_eq!(extract_score(Some("Invalid score format")), None);
}

#[test]
fn test_extract_score_no_marker() {
    assert_eq!(extract_score(Some("Some other output")), None);
}

#[test]
fn test_extract_score_malformed_number() {
    let output = "Your code has been rated at abc/10";
    assert_eq!(extract_score(Some(output)), None);
}

#[test]
fn test_extract_score_marker_at_end() {
    let output = "Your code has been rated at ";
    assert_eq!(extract_score(Some(output)), None);
}

#[test]
fn test_extract_score_none_output() {
    assert_eq!(extract_score(None), None);
}

#[test]
fn test_extract_score_empty_output() {
    assert_eq!(extract_score(Some("")), None);
}
