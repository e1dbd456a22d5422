//! Configuration management
//!
//! Optional user preferences for the CLI. Config is stored at
//! `~/.vincheck/config.toml`:
//!
//! ```toml
//! [output]
//! format = "json"    # or "human"
//!
//! [extract]
//! all = true         # report every VIN instead of the first
//! ```
//!
//! The core services never read configuration; only the binary does.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::output::OutputMode;

/// Directory name for user-level state
pub const GLOBAL_DIR: &str = ".vincheck";

/// Config filename inside [`GLOBAL_DIR`]
pub const CONFIG_FILE: &str = "config.toml";

/// Errors that can occur when loading or saving config
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read or written
    #[error("failed to access config {}: {source}", path.display())]
    Io {
        /// Path of the config file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        /// Path of the config file
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// Config could not be serialized
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// vincheck configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,
    /// Extraction preferences
    #[serde(default)]
    pub extract: ExtractConfig,
}

/// Output preferences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format when `--json` is not given
    #[serde(default)]
    pub format: OutputMode,
}

/// Extraction preferences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Report every valid VIN instead of only the leftmost
    #[serde(default)]
    pub all: bool,
}

impl Config {
    /// Get the config directory path
    #[must_use]
    pub fn config_dir() -> PathBuf {
        dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
    }

    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    /// Load config from the default location.
    ///
    /// A missing or unreadable file yields the defaults; parse failures are
    /// logged and ignored.
    #[must_use]
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Self::default();
        }

        Self::load_from(&path).unwrap_or_else(|e| {
            warn!("ignoring config: {e}");
            Self::default()
        })
    }

    /// Load config from an explicit path, failing on any error
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse config from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Save config to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source: std::io::Error| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(io_err)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(io_err)
    }
}
