//! Complexity checks for the traced scan
//!
//! Counts are exact, so these run fast and deterministically; they guard the
//! linear bound on comparisons and steps rather than wall-clock time.

use kmp_trace::{search, StepKind};

#[test]
fn comparisons_stay_within_twice_text_length() {
    let inputs = [
        ("a".repeat(500), "aaab".to_string()),
        ("ab".repeat(250), "abab".to_string()),
        ("abcabd".repeat(80), "abcabd".to_string()),
        ("aaaaaaaaab".repeat(50), "aaaab".to_string()),
    ];

    for (text, pattern) in &inputs {
        let result = search(text, pattern);
        assert!(
            result.comparisons <= 2 * text.len(),
            "{} comparisons for text of {} in '{pattern}'",
            result.comparisons,
            text.len()
        );
        assert!(result.steps.len() <= 4 * text.len());
    }
}

#[test]
fn worst_case_fallbacks_are_amortized() {
    // every 'b' forces a mismatch after a long partial match
    let text = "aaaaab".repeat(100);
    let result = search(&text, "aaaaaa");
    assert!(!result.found);

    let realigns = result
        .steps
        .iter()
        .filter(|s| s.kind == StepKind::Realign)
        .count();
    assert!(realigns <= text.len());
}

#[test]
fn every_step_carries_full_snapshot() {
    let text = "abcab".repeat(40);
    let result = search(&text, "cab");
    assert!(result
        .steps
        .iter()
        .all(|s| s.prefix_function.len() == text.len()));
    assert_eq!(result.positions.len(), 40);
}
