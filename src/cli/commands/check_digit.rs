//! Compute a VIN check digit

use vincheck::core::services::{
    CHECK_DIGIT_POSITION, VIN_LENGTH, canonicalize, compute_check_digit,
};
use vincheck::output::{CheckDigitResult, OutputMode};

/// Print the check digit for a 17-character VIN
pub fn check_digit(vin: &str, mode: OutputMode) -> anyhow::Result<()> {
    let input = canonicalize(vin);
    let len = input.chars().count();

    // The engine does not guard length itself
    if len != VIN_LENGTH {
        anyhow::bail!("expected {VIN_LENGTH} characters, got {len}");
    }

    let check_digit = compute_check_digit(&input);
    let matches = input.chars().nth(CHECK_DIGIT_POSITION) == Some(check_digit);

    let result = CheckDigitResult {
        input,
        check_digit,
        matches,
    };
    result.render(mode);

    Ok(())
}
