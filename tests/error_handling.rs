use kmp_trace::{search, search_bytes, MatchError, TraceableMatcher};

#[test]
fn empty_text_returns_error_without_trace() {
    let result = search("", "a");
    assert_eq!(result.error, Some(MatchError::EmptyText));
    assert!(result.steps.is_empty());
    assert!(result.failure_function.is_empty());
    assert!(result.positions.is_empty());
    assert!(!result.found);
    assert_eq!(result.comparisons, 0);
}

#[test]
fn empty_pattern_returns_error_without_trace() {
    let result = search("a", "");
    assert_eq!(result.error, Some(MatchError::EmptyPattern));
    assert!(result.steps.is_empty());
    assert!(result.failure_function.is_empty());
}

#[test]
fn empty_pattern_wins_when_both_are_empty() {
    assert_eq!(search_bytes(b"", b"").error, Some(MatchError::EmptyPattern));
}

#[test]
fn error_messages_are_stable() {
    assert_eq!(MatchError::EmptyPattern.to_string(), "Pattern cannot be empty");
    assert_eq!(MatchError::EmptyText.to_string(), "Text cannot be empty");
}

#[test]
fn error_serializes_as_message_string() {
    let json = serde_json::to_value(search("", "a")).expect("serialize");
    assert_eq!(json["error"], serde_json::json!("Text cannot be empty"));
    assert_eq!(json["steps"], serde_json::json!([]));
}

#[test]
fn successful_result_omits_error_field() {
    let json = serde_json::to_value(search("abc", "b")).expect("serialize");
    assert!(json.get("error").is_none());
}

#[test]
fn run_propagates_error_with_question_mark() {
    fn positions(text: &str, pattern: &str) -> Result<Vec<usize>, MatchError> {
        Ok(TraceableMatcher::for_str(text, pattern).run()?.positions)
    }

    assert_eq!(positions("abab", "ab"), Ok(vec![0, 2]));
    assert_eq!(positions("abab", ""), Err(MatchError::EmptyPattern));
}
