//! vincheck - Vehicle Identification Number validation and extraction
//!
//! This library computes VIN check digits, validates candidates, and
//! recovers a valid VIN embedded in noisy barcode or OCR output.
//!
//! ```
//! use vincheck::core::services::{compute_check_digit, extract_vin, is_valid_vin};
//!
//! assert_eq!(compute_check_digit("1HGBH41JXMN109186"), 'X');
//! assert!(is_valid_vin("1HGBH41JXMN109186"));
//! assert_eq!(extract_vin("VIN# 1HGBH41JXMN109186.").unwrap(), "1HGBH41JXMN109186");
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod core;
pub mod output;

pub use crate::core::models::{Vin, VinError};
pub use crate::core::services::{compute_check_digit, extract_vin, is_valid_vin, transliterate};
