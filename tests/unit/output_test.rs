//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use vincheck::core::models::Vin;
use vincheck::output::{
    CheckDigitResult, ExtractResult, OperationResult, OutputMode, ValidateResult, ValidationEntry,
};

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn output_mode_from_str() {
    assert_eq!("JSON".parse::<OutputMode>(), Ok(OutputMode::Json));
    assert_eq!("human".parse::<OutputMode>(), Ok(OutputMode::Human));
    assert!("xml".parse::<OutputMode>().is_err());
}

// =============================================================================
// Serialization Tests
// =============================================================================

#[test]
fn check_digit_result_serialization() {
    let result = CheckDigitResult {
        input: "1HGBH41JXMN109186".to_string(),
        check_digit: 'X',
        matches: true,
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"check_digit\":\"X\""));
    assert!(json.contains("\"matches\":true"));
}

#[test]
fn validate_result_omits_empty_reason() {
    let result = ValidateResult {
        passed: true,
        entries: vec![ValidationEntry {
            input: "1HGBH41JXMN109186".to_string(),
            valid: true,
            reason: None,
            detail: None,
        }],
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"passed\":true"));
    assert!(!json.contains("reason"));
}

#[test]
fn validate_result_with_failure() {
    let result = ValidateResult {
        passed: false,
        entries: vec![ValidationEntry {
            input: "1HGBH41JXMN10918".to_string(),
            valid: false,
            reason: Some("invalid_length".to_string()),
            detail: Some("expected 17 characters, got 16".to_string()),
        }],
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"reason\":\"invalid_length\""));
}

#[test]
fn extract_result_lists_vins_as_strings() {
    let result = ExtractResult {
        found: true,
        vins: vec![Vin::parse("1HGBH41JXMN109186").unwrap()],
    };

    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(json, r#"{"found":true,"vins":["1HGBH41JXMN109186"]}"#);
}

#[test]
fn operation_result_serialization() {
    let result = OperationResult {
        success: true,
        message: "Created config.toml".to_string(),
    };

    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(json, r#"{"success":true,"message":"Created config.toml"}"#);
}

#[test]
fn output_mode_display_round_trips() {
    for mode in [OutputMode::Human, OutputMode::Json] {
        assert_eq!(mode.to_string().parse::<OutputMode>(), Ok(mode));
    }
}
