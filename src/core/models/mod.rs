//! Domain models for vincheck
//!
//! Pure value types with no I/O dependencies.
//!
//! - [`Vin`] - A validated Vehicle Identification Number
//! - [`VinError`] - Why a candidate failed validation

mod vin;

pub use vin::{Vin, VinError};
