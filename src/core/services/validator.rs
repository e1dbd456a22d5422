//! VIN validation
//!
//! A single boolean gate: length, disallowed letters, then the check digit.

use super::checksum::{CHECK_DIGIT_POSITION, VIN_LENGTH, compute_check_digit};

/// Letters never used in a VIN (confusable with `1` and `0`)
pub const DISALLOWED_LETTERS: [char; 3] = ['I', 'O', 'Q'];

/// Trim surrounding whitespace and uppercase a VIN candidate
#[must_use]
pub fn canonicalize(candidate: &str) -> String {
    candidate.trim().to_uppercase()
}

/// Check whether a candidate is a valid VIN.
///
/// The candidate is trimmed and uppercased, then rejected if it is absent,
/// not exactly 17 characters long, contains `I`, `O` or `Q`, or carries a
/// check digit that does not match the computed one. No reason is reported.
///
/// Other characters outside `[0-9A-Z]` (punctuation, non-ASCII letters) are
/// not rejected here; they weigh 0 in the checksum. [`Vin::parse`] is stricter
/// and refuses them, so it can fail on a candidate this gate accepts.
///
/// [`Vin::parse`]: crate::core::models::Vin::parse
///
/// ```
/// use vincheck::core::services::is_valid_vin;
///
/// assert!(is_valid_vin("1HGBH41JXMN109186"));
/// assert!(is_valid_vin(" 1hgbh41jxmn109186\n"));
/// assert!(!is_valid_vin("1HGBH41JXMN109187"));
/// assert!(!is_valid_vin(None::<&str>));
/// ```
#[must_use]
pub fn is_valid_vin<'a>(candidate: impl Into<Option<&'a str>>) -> bool {
    let Some(candidate) = candidate.into() else {
        return false;
    };

    let normalized = canonicalize(candidate);
    let chars: Vec<char> = normalized.chars().collect();

    if chars.len() != VIN_LENGTH {
        return false;
    }

    if chars.iter().any(|c| DISALLOWED_LETTERS.contains(c)) {
        return false;
    }

    chars[CHECK_DIGIT_POSITION] == compute_check_digit(&normalized)
}
