//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::{Deserialize, Serialize};

use crate::core::models::Vin;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid output format: {s}. Use: human, json")),
        }
    }
}

/// Result of a check-digit computation
#[derive(Debug, Serialize)]
pub struct CheckDigitResult {
    /// The input as given (uppercased)
    pub input: String,
    /// Computed check digit
    pub check_digit: char,
    /// Whether the input already carries this check digit
    pub matches: bool,
}

/// Result of validating one or more candidates
#[derive(Debug, Serialize)]
pub struct ValidateResult {
    /// Whether every candidate is valid
    pub passed: bool,
    /// One entry per candidate, in input order
    pub entries: Vec<ValidationEntry>,
}

/// Validation outcome for a single candidate
#[derive(Debug, Serialize)]
pub struct ValidationEntry {
    /// The candidate as given
    pub input: String,
    /// Whether the candidate is a valid VIN
    pub valid: bool,
    /// Machine-readable failure code (e.g., `check_digit_mismatch`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Human-readable failure description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Result of extracting VINs from text
#[derive(Debug, Serialize)]
pub struct ExtractResult {
    /// Whether at least one VIN was found
    pub found: bool,
    /// Matched VINs, leftmost first
    pub vins: Vec<Vin>,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

impl CheckDigitResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.check_digit),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

impl ValidateResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        for entry in &self.entries {
            if entry.valid {
                println!("VALID    {}", entry.input);
            } else {
                println!("INVALID  {}", entry.input);
                if let Some(detail) = &entry.detail {
                    println!("         {detail}");
                }
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl ExtractResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.vins.is_empty() {
            println!("No VIN found.");
            return;
        }

        for vin in &self.vins {
            println!("{vin}");
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
