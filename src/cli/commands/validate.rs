//! Validate VIN candidates

use log::debug;
use vincheck::core::models::Vin;
use vincheck::output::{OutputMode, ValidateResult, ValidationEntry};

/// Validate each candidate; exits with status 1 if any is invalid
pub fn validate(candidates: &[String], mode: OutputMode) -> anyhow::Result<()> {
    let entries: Vec<ValidationEntry> = candidates
        .iter()
        .map(|candidate| match Vin::parse(candidate) {
            Ok(_) => ValidationEntry {
                input: candidate.clone(),
                valid: true,
                reason: None,
                detail: None,
            },
            Err(e) => {
                debug!("{candidate}: {e}");
                ValidationEntry {
                    input: candidate.clone(),
                    valid: false,
                    reason: Some(e.reason().to_string()),
                    detail: Some(e.to_string()),
                }
            },
        })
        .collect();

    let passed = entries.iter().all(|e| e.valid);

    let result = ValidateResult { passed, entries };
    result.render(mode);

    if !passed {
        std::process::exit(1);
    }

    Ok(())
}
