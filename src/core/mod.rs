//! Core domain logic for vincheck
//!
//! This module contains pure logic with no I/O dependencies. Every
//! operation is synchronous and stateless, so it is safe to call from
//! any number of threads.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Vin, VinError)
//! - `services/` - Transliteration, checksum, validation, extraction

pub mod models;
pub mod services;
