//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use test_case::test_case;
use vincheck::core::models::Vin;
use vincheck::core::services::{compute_check_digit, extract_vin, is_valid_vin, transliterate};

// =============================================================================
// Transliteration Tests
// =============================================================================

#[test_case('A', 1 ; "a")]
#[test_case('J', 1 ; "j")]
#[test_case('S', 2 ; "s")]
#[test_case('T', 3 ; "t")]
#[test_case('P', 7 ; "p")]
#[test_case('X', 7 ; "x")]
#[test_case('Y', 8 ; "y")]
#[test_case('R', 9 ; "r")]
#[test_case('Z', 9 ; "z")]
#[test_case('5', 5 ; "digit")]
#[test_case('I', 0 ; "i unmapped")]
#[test_case('O', 0 ; "o unmapped")]
#[test_case('Q', 0 ; "q unmapped")]
#[test_case('#', 0 ; "punctuation unmapped")]
fn test_transliterate(c: char, expected: u32) {
    assert_eq!(transliterate(c), expected);
}

// =============================================================================
// Check Digit Tests
// =============================================================================

#[test_case("1HGBH41JXMN109186", 'X' ; "honda reference")]
#[test_case("1M8GDM9AXKP042788", 'X' ; "remainder ten")]
#[test_case("JH4KA7561PC008269", '1' ; "acura")]
#[test_case("00000000000000000", '0' ; "all zeros")]
fn test_check_digit(vin: &str, expected: char) {
    assert_eq!(compute_check_digit(vin), expected);
}

// =============================================================================
// Validation Tests
// =============================================================================

// Candidates drawn from [0-9A-Z], where both gates agree
#[test_case("1HGBH41JXMN109186", true ; "reference vin")]
#[test_case("1HGBH41JXMN109187", false ; "altered last digit")]
#[test_case("1HGBH41JXMN10918", false ; "sixteen chars")]
#[test_case("1HGBH41JXMN1091866", false ; "eighteen chars")]
#[test_case("1HGBH41JQMN109186", false ; "contains q")]
#[test_case("1HGBH41IXMN109186", false ; "contains i")]
#[test_case("11111111111111111", true ; "all ones")]
#[test_case("", false ; "empty")]
fn test_is_valid(candidate: &str, expected: bool) {
    assert_eq!(is_valid_vin(candidate), expected);
    assert_eq!(Vin::parse(candidate).is_ok(), expected);
}

// =============================================================================
// Extraction Tests
// =============================================================================

#[test_case("Label:ABC 1HGBH41JXMN109186 End", Some("1HGBH41JXMN109186") ; "labelled")]
#[test_case("no vin here", None ; "absent")]
#[test_case("1HGBH 41JXM N1091 86", Some("1HGBH41JXMN109186") ; "spaced groups")]
#[test_case("VIN# 1HGBH41JXMN109186.", Some("1HGBH41JXMN109186") ; "hash label")]
#[test_case("1HGBH41JXMN109186JH4KA7561PC008269", Some("1HGBH41JXMN109186") ; "leftmost of two")]
fn test_extract(text: &str, expected: Option<&str>) {
    let found = extract_vin(text);
    assert_eq!(found.as_ref().map(Vin::as_str), expected);
}
