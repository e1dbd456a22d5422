//! Check-digit computation
//!
//! The check digit is the weighted sum of the transliterated characters,
//! taken modulo 11. A remainder of 10 is written as `X`.

use super::transliterate;

/// Number of characters in a VIN
pub const VIN_LENGTH: usize = 17;

/// Zero-based index of the check digit
pub const CHECK_DIGIT_POSITION: usize = 8;

/// Positional weights, one per VIN character.
///
/// The check-digit slot itself carries weight 0.
pub const WEIGHTS: [u32; VIN_LENGTH] = [8, 7, 6, 5, 4, 3, 2, 10, 0, 9, 8, 7, 6, 5, 4, 3, 2];

/// Compute the check digit for a 17-character VIN.
///
/// The input is uppercased first, so the result is case-insensitive.
/// Length is not re-validated: only the first 17 characters are weighted,
/// and a shorter input simply sums fewer positions. Characters outside the
/// transliteration table (including `I`, `O`, `Q`) contribute 0.
///
/// ```
/// use vincheck::core::services::compute_check_digit;
///
/// assert_eq!(compute_check_digit("1HGBH41JXMN109186"), 'X');
/// assert_eq!(compute_check_digit("1hgbh41jxmn109186"), 'X');
/// ```
#[must_use]
pub fn compute_check_digit(vin: &str) -> char {
    let sum: u32 = vin
        .chars()
        .flat_map(char::to_uppercase)
        .zip(WEIGHTS)
        .map(|(c, weight)| transliterate(c) * weight)
        .sum();

    check_character(sum % 11)
}

/// Render a mod-11 remainder as its check character
const fn check_character(remainder: u32) -> char {
    match char::from_digit(remainder, 10) {
        Some(digit) => digit,
        None => 'X',
    }
}
