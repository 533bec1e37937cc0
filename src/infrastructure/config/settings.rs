//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all matcher settings.
//! Every section is optional; a missing file section falls back to defaults.
//!
//! # Example
//!
//! ```no_run
//! use mindmatch::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("mindmatch.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::conflict::ConflictConfig;
use super::logging::LoggingConfig;
use super::matching::MatchingConfig;
use super::solver::SolverConfig;
use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Load bounds and trimming.
    #[serde(default)]
    pub matching: MatchingConfig,

    /// Conflict-of-interest resolution.
    #[serde(default)]
    pub conflicts: ConflictConfig,

    /// LP solver backend settings.
    #[serde(default)]
    pub solver: SolverConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be loaded.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    ///
    /// Checks that all values are within acceptable ranges.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "level" }.into());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("expected \"pretty\" or \"json\", got \"{}\"", self.logging.format),
            }
            .into());
        }

        if self.matching.n_match == 0 {
            return Err(ConfigError::InvalidValue {
                field: "n_match",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        let bounds = self.matching.bounds();
        if bounds.min_per_row > bounds.max_per_row {
            return Err(ConfigError::InvalidValue {
                field: "min_per_row",
                reason: "must be <= max_per_row".to_string(),
            }
            .into());
        }
        if bounds.min_per_column > bounds.max_per_column {
            return Err(ConfigError::InvalidValue {
                field: "min_per_column",
                reason: "must be <= max_per_column".to_string(),
            }
            .into());
        }

        if self.conflicts.threshold > 100 {
            return Err(ConfigError::InvalidValue {
                field: "threshold",
                reason: "must be between 0 and 100".to_string(),
            }
            .into());
        }
        if self.conflicts.delimiter.is_empty() {
            return Err(ConfigError::MissingField { field: "delimiter" }.into());
        }

        self.solver.time_limit()?;
        Ok(())
    }

    /// Render the effective configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| {
            ConfigError::InvalidValue {
                field: "config",
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
