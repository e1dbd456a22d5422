//! Character transliteration
//!
//! Maps a single VIN character to the numeric value it contributes to the
//! check-digit sum. Digits keep their face value; letters follow the fixed
//! conversion table (`I`, `O` and `Q` have no entry).

/// Numeric value of a VIN character for checksum purposes.
///
/// Expects an uppercase character. Anything outside the table, including
/// `I`, `O`, `Q`, lowercase letters and punctuation, maps to `0`. The
/// function is total; rejecting such characters is the validator's job.
///
/// ```
/// use vincheck::core::services::transliterate;
///
/// assert_eq!(transliterate('7'), 7);
/// assert_eq!(transliterate('H'), 8);
/// assert_eq!(transliterate('Q'), 0);
/// ```
#[must_use]
pub const fn transliterate(c: char) -> u32 {
    match c {
        '0'..='9' => c as u32 - '0' as u32,
        'A' | 'J' => 1,
        'B' | 'K' | 'S' => 2,
        'C' | 'L' | 'T' => 3,
        'D' | 'M' | 'U' => 4,
        'E' | 'N' | 'V' => 5,
        'F' | 'W' => 6,
        'G' | 'P' | 'X' => 7,
        'H' | 'Y' => 8,
        'R' | 'Z' => 9,
        _ => 0,
    }
}
