//! VIN extraction from noisy text
//!
//! Scanner and OCR output often wraps a VIN in labels, separators or
//! stray symbols. Extraction strips everything that is not an ASCII letter
//! or digit, then slides a 17-character window from left to right and keeps
//! the windows that validate.

use log::debug;

use super::checksum::VIN_LENGTH;
use super::validator::is_valid_vin;
use crate::core::models::Vin;

/// Drop every non-alphanumeric character and uppercase the rest
///
/// ```
/// use vincheck::core::services::normalize;
///
/// assert_eq!(normalize("vin: 1hg-bh4"), "VIN1HGBH4");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Iterate over every validating window of the normalized text, leftmost first
fn valid_windows(normalized: &str) -> impl Iterator<Item = (usize, &str)> {
    let last_offset = normalized.len().checked_sub(VIN_LENGTH);

    last_offset
        .into_iter()
        .flat_map(|last| 0..=last)
        .map(move |offset| (offset, &normalized[offset..offset + VIN_LENGTH]))
        .filter(|(_, window)| is_valid_vin(*window))
}

/// Find the leftmost valid VIN embedded in `text`.
///
/// Returns `None` when no 17-character window validates; that is an
/// ordinary outcome, not an error.
///
/// ```
/// use vincheck::core::services::extract_vin;
///
/// let vin = extract_vin("Label:ABC 1HGBH41JXMN109186 End").unwrap();
/// assert_eq!(vin.as_str(), "1HGBH41JXMN109186");
/// assert!(extract_vin("no vin here").is_none());
/// ```
#[must_use]
pub fn extract_vin(text: &str) -> Option<Vin> {
    let normalized = normalize(text);
    let (offset, window) = valid_windows(&normalized).next()?;
    debug!("found VIN {window} at normalized offset {offset}");
    Some(Vin::from_validated(window))
}

/// Find every valid VIN window in `text`, in increasing offset order.
///
/// Overlapping windows are each reported.
#[must_use]
pub fn extract_all_vins(text: &str) -> Vec<Vin> {
    let normalized = normalize(text);
    valid_windows(&normalized)
        .map(|(offset, window)| {
            debug!("found VIN {window} at normalized offset {offset}");
            Vin::from_validated(window)
        })
        .collect()
}
