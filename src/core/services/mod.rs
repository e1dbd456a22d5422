//! VIN services
//!
//! Pure, stateless functions in dependency order:
//!
//! - [`transliterate`] - Character to numeric value
//! - [`checksum`] - Weighted mod-11 check digit
//! - [`validator`] - Boolean VIN gate
//! - [`extractor`] - Leftmost valid VIN in noisy text

pub mod checksum;
pub mod extractor;
pub mod transliterate;
pub mod validator;

pub use checksum::{CHECK_DIGIT_POSITION, VIN_LENGTH, WEIGHTS, compute_check_digit};
pub use extractor::{extract_all_vins, extract_vin, normalize};
pub use transliterate::transliterate;
pub use validator::{DISALLOWED_LETTERS, canonicalize, is_valid_vin};
