//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::debug;

use super::commands;
use vincheck::config::Config;
use vincheck::output::OutputMode;

/// vincheck - VIN validation and extraction
#[derive(Parser, Debug)]
#[command(
    name = "vincheck",
    version,
    about = "Validate Vehicle Identification Numbers and extract them from noisy text",
    long_about = "Validate Vehicle Identification Numbers and extract them from noisy text.\n\n\
                  Check digits are computed with the standard weighted mod-11 checksum.\n\
                  Extraction returns the leftmost valid 17-character window."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Output format: human, json (overrides the config file)
    #[arg(long, global = true, value_name = "FORMAT", conflicts_with = "json")]
    pub format: Option<OutputMode>,

    /// Path to a config file (default: ~/.vincheck/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the check digit for a 17-character VIN
    CheckDigit {
        /// VIN whose check digit to compute
        vin: String,
    },

    /// Validate one or more VIN candidates
    Validate {
        /// Candidates to validate
        #[arg(required = true)]
        candidates: Vec<String>,
    },

    /// Extract a VIN from scanner or OCR text (reads stdin when no text is given)
    Extract {
        /// Text to search; multiple arguments are joined with spaces
        text: Vec<String>,

        /// Report every valid VIN instead of only the leftmost
        #[arg(short, long)]
        all: bool,
    },

    /// Write a config file with the current settings
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let initializing = matches!(cli.command, Some(Command::Init { .. }));
    let config = match &cli.config {
        // init may target a file that does not exist yet
        Some(path) if initializing && !path.exists() => Config::default(),
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    debug!("effective config: {config:?}");

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        cli.format.unwrap_or(config.output.format)
    };
    debug!("output mode: {output_mode}");

    match cli.command {
        Some(Command::CheckDigit { vin }) => commands::check_digit(&vin, output_mode),
        Some(Command::Validate { candidates }) => commands::validate(&candidates, output_mode),
        Some(Command::Extract { text, all }) => {
            commands::extract(&text, all || config.extract.all, output_mode)
        },
        Some(Command::Init { force }) => {
            let path = cli.config.clone().unwrap_or_else(Config::config_path);
            let mut config = config;
            config.output.format = output_mode;
            commands::init(&path, config, force, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("vincheck v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("vincheck v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'vincheck --help' for usage");
                println!("Run 'vincheck validate <VIN>' to check a VIN");
            }
            Ok(())
        },
    }
}
