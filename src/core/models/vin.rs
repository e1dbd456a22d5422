//! Validated VIN value type
//!
//! A [`Vin`] can only be built from input that passes every format and
//! checksum rule, so holding one proves the string is a valid VIN.
//!
//! # Examples
//!
//! ```
//! use vincheck::core::models::{Vin, VinError};
//!
//! let vin = Vin::parse(" 1hgbh41jxmn109186 ").unwrap();
//! assert_eq!(vin.as_str(), "1HGBH41JXMN109186");
//! assert_eq!(vin.check_digit(), 'X');
//!
//! let err = Vin::parse("1HGBH41JXMN109187").unwrap_err();
//! assert_eq!(err, VinError::CheckDigitMismatch { expected: '1', found: 'X' });
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::core::services::{
    CHECK_DIGIT_POSITION, DISALLOWED_LETTERS, VIN_LENGTH, canonicalize, compute_check_digit,
};

/// Reasons a string is not a valid VIN, reported in the order they are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VinError {
    /// Normalized input is not 17 characters long
    #[error("expected 17 characters, got {0}")]
    InvalidLength(usize),

    /// Character outside `0-9` and `A-Z`
    #[error("invalid character {ch:?} at position {position}")]
    InvalidCharacter {
        /// Offending character
        ch: char,
        /// Zero-based index in the normalized input
        position: usize,
    },

    /// `I`, `O` or `Q`
    #[error("letter {ch} is not allowed in a VIN (position {position})")]
    DisallowedLetter {
        /// Offending letter
        ch: char,
        /// Zero-based index in the normalized input
        position: usize,
    },

    /// Character at position 8 differs from the computed check digit
    #[error("check digit mismatch: expected {expected}, found {found}")]
    CheckDigitMismatch {
        /// Computed check digit
        expected: char,
        /// Check digit carried by the input
        found: char,
    },
}

impl VinError {
    /// Stable machine-readable code for this error
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidLength(_) => "invalid_length",
            Self::InvalidCharacter { .. } => "invalid_character",
            Self::DisallowedLetter { .. } => "disallowed_letter",
            Self::CheckDigitMismatch { .. } => "check_digit_mismatch",
        }
    }
}

/// A validated, canonical (uppercase) Vehicle Identification Number
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vin(String);

impl Vin {
    /// Parse and validate a VIN candidate.
    ///
    /// Surrounding whitespace is trimmed and letters are uppercased before
    /// checking. The first failing rule is returned as the error.
    pub fn parse(candidate: &str) -> Result<Self, VinError> {
        let normalized = canonicalize(candidate);
        let chars: Vec<char> = normalized.chars().collect();

        if chars.len() != VIN_LENGTH {
            return Err(VinError::InvalidLength(chars.len()));
        }

        if let Some((position, &ch)) =
            chars.iter().enumerate().find(|(_, c)| !c.is_ascii_alphanumeric())
        {
            return Err(VinError::InvalidCharacter { ch, position });
        }

        if let Some((position, &ch)) =
            chars.iter().enumerate().find(|(_, c)| DISALLOWED_LETTERS.contains(*c))
        {
            return Err(VinError::DisallowedLetter { ch, position });
        }

        let expected = compute_check_digit(&normalized);
        let found = chars[CHECK_DIGIT_POSITION];
        if found != expected {
            return Err(VinError::CheckDigitMismatch { expected, found });
        }

        Ok(Self(normalized))
    }

    /// Wrap a window the extractor has already validated
    pub(crate) fn from_validated(window: &str) -> Self {
        debug_assert!(crate::core::services::is_valid_vin(window));
        Self(window.to_string())
    }

    /// The canonical 17-character string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the VIN, returning the canonical string
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// The check digit (`0`-`9` or `X`) at position 8
    #[must_use]
    pub fn check_digit(&self) -> char {
        // ASCII-only by construction
        char::from(self.0.as_bytes()[CHECK_DIGIT_POSITION])
    }

    /// World manufacturer identifier section (positions 0-2), raw
    #[must_use]
    pub fn wmi(&self) -> &str {
        &self.0[..3]
    }

    /// Vehicle descriptor section (positions 3-8), raw
    #[must_use]
    pub fn vds(&self) -> &str {
        &self.0[3..9]
    }

    /// Vehicle identifier section (positions 9-16), raw
    #[must_use]
    pub fn vis(&self) -> &str {
        &self.0[9..]
    }
}

impl std::fmt::Display for Vin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Vin {
    type Err = VinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Vin {
    type Error = VinError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<str> for Vin {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Vin {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Vin {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Serialize for Vin {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Vin {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
