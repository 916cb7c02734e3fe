//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use numerus::output::{DecodeOutcome, EncodeOutcome, OutputMode};
use numerus::validator::ValidationError;

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// EncodeOutcome Serialization Tests
// =============================================================================

#[test]
fn encode_outcome_serialization() {
    let outcome = EncodeOutcome {
        value: 1_994,
        numeral: "MCMXCIV".to_string(),
    };

    let json = serde_json::to_string(&outcome).unwrap();
    assert!(json.contains("\"value\":1994"));
    assert!(json.contains("\"numeral\":\"MCMXCIV\""));
}

#[test]
fn encode_outcome_zero_serializes_an_empty_numeral() {
    let outcome = EncodeOutcome {
        value: 0,
        numeral: String::new(),
    };

    let json = serde_json::to_string(&outcome).unwrap();
    assert!(json.contains("\"numeral\":\"\""));
}

// =============================================================================
// DecodeOutcome Tests
// =============================================================================

#[test]
fn decode_outcome_success_carries_no_token() {
    let outcome = DecodeOutcome::from_result(Ok(14));
    assert!(outcome.success);
    assert_eq!(outcome.token, None);
    assert_eq!(outcome.answer, 14);

    let json = serde_json::to_string(&outcome).unwrap();
    assert!(json.contains("\"success\":true"));
    assert!(json.contains("\"token\":null"));
    assert!(json.contains("\"answer\":14"));
}

#[test]
fn decode_outcome_failure_zeroes_the_answer() {
    let outcome = DecodeOutcome::from_result(Err(ValidationError::Repeat));
    assert!(!outcome.success);
    assert_eq!(outcome.token, Some("InvalidRepeat"));
    assert_eq!(outcome.answer, 0);

    let json = serde_json::to_string(&outcome).unwrap();
    assert!(json.contains("\"success\":false"));
    assert!(json.contains("\"token\":\"InvalidRepeat\""));
    assert!(json.contains("\"answer\":0"));
}

#[test]
fn decode_outcome_tokens_follow_the_error_variant() {
    for (error, token) in [
        (ValidationError::Empty, "InvalidEmpty"),
        (ValidationError::Symbol, "InvalidSymbol"),
        (ValidationError::Repeat, "InvalidRepeat"),
        (ValidationError::OrderOrComplex, "InvalidOrderOrComplex"),
    ] {
        let outcome = DecodeOutcome::from_result(Err(error));
        assert_eq!(outcome.token, Some(token));
    }
}
