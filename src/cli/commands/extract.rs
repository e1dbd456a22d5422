//! Extract VINs from text

use std::io;

use log::debug;
use vincheck::core::services::{extract_all_vins, extract_vin};
use vincheck::output::{ExtractResult, OutputMode};

/// Search the given text (or stdin) for VINs; exits with status 1 if none is found
pub fn extract(text: &[String], all: bool, mode: OutputMode) -> anyhow::Result<()> {
    let input = if text.is_empty() {
        debug!("reading text from stdin");
        io::read_to_string(io::stdin())?
    } else {
        text.join(" ")
    };

    let vins = if all {
        extract_all_vins(&input)
    } else {
        extract_vin(&input).into_iter().collect()
    };

    let found = !vins.is_empty();

    let result = ExtractResult { found, vins };
    result.render(mode);

    if !found {
        std::process::exit(1);
    }

    Ok(())
}
