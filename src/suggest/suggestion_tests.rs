//! Tests for suggestion response decoding

use super::*;

#[test]
fn test_parse_well_formed_response() {
    let body = r#"{"suggestions": [
        {"text": "Диван", "type": "товар"},
        {"text": "Лофт", "type": "стиль"}
    ]}"#;

    let suggestions = parse_suggestions(body).unwrap();

    assert_eq!(
        suggestions,
        vec![Suggestion::new("Диван", "товар"), Suggestion::new("Лофт", "стиль")]
    );
}

#[test]
fn test_parse_empty_list() {
    let suggestions = parse_suggestions(r#"{"suggestions": []}"#).unwrap();
    assert!(suggestions.is_empty());
}

#[test]
fn test_parse_absent_field_is_empty() {
    let suggestions = parse_suggestions(r#"{"results": [1, 2]}"#).unwrap();
    assert!(suggestions.is_empty());
}

#[test]
fn test_parse_null_field_is_empty() {
    let suggestions = parse_suggestions(r#"{"suggestions": null}"#).unwrap();
    assert!(suggestions.is_empty());
}

#[test]
fn test_parse_non_array_field_is_empty() {
    let suggestions = parse_suggestions(r#"{"suggestions": "abc"}"#).unwrap();
    assert!(suggestions.is_empty());
}

#[test]
fn test_parse_top_level_array_is_empty() {
    let suggestions = parse_suggestions(r#"[{"text": "a", "type": "b"}]"#).unwrap();
    assert!(suggestions.is_empty());
}

#[test]
fn test_parse_skips_non_object_entries() {
    let body = r#"{"suggestions": [42, "loose", {"text": "Стол", "type": "товар"}, null]}"#;

    let suggestions = parse_suggestions(body).unwrap();

    assert_eq!(suggestions, vec![Suggestion::new("Стол", "товар")]);
}

#[test]
fn test_parse_missing_keys_default_to_empty() {
    let body = r#"{"suggestions": [{"text": "Комод"}, {"type": "цвет"}]}"#;

    let suggestions = parse_suggestions(body).unwrap();

    assert_eq!(
        suggestions,
        vec![Suggestion::new("Комод", ""), Suggestion::new("", "цвет")]
    );
}

#[test]
fn test_parse_wrong_value_type_is_skipped() {
    let body = r#"{"suggestions": [{"text": 7, "type": "товар"}, {"text": "Ok", "type": "x"}]}"#;

    let suggestions = parse_suggestions(body).unwrap();

    assert_eq!(suggestions, vec![Suggestion::new("Ok", "x")]);
}

#[test]
fn test_parse_invalid_json_is_error() {
    let result = parse_suggestions("<html>Server Error</html>");
    assert!(matches!(result, Err(LookupError::Parse(_))));
}

#[test]
fn test_parse_empty_body_is_error() {
    let result = parse_suggestions("");
    assert!(matches!(result, Err(LookupError::Parse(_))));
}
