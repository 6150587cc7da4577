//! Engine configuration via `schengen.toml`
//!
//! Every field has a default, so an empty file (or no file at all) gives the
//! standard 90-day projection with strict interval validation.

use schengen_core::{Error, Result, DEFAULT_HORIZON_DAYS};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name looked up next to the history file.
pub const CONFIG_FILE_NAME: &str = "schengen.toml";

/// Smallest horizon that evaluates at least the rejoin date itself.
pub const MIN_HORIZON_DAYS: u32 = 2;

/// What to do with a stay whose exit precedes its entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvertedIntervalPolicy {
    /// Fail the whole batch with `Error::InvertedInterval`
    #[default]
    Reject,
    /// Drop the row; it contributes zero days
    Skip,
}

/// Engine configuration loaded from `schengen.toml`.
///
/// # Example
///
/// ```toml
/// horizon_days = 90
/// inverted_intervals = "reject"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Days the projection looks ahead from the rejoin date.
    #[serde(default = "default_horizon_days")]
    pub horizon_days: u32,
    /// Handling of stays that exit before they enter.
    #[serde(default)]
    pub inverted_intervals: InvertedIntervalPolicy,
}

fn default_horizon_days() -> u32 {
    DEFAULT_HORIZON_DAYS
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            horizon_days: default_horizon_days(),
            inverted_intervals: InvertedIntervalPolicy::default(),
        }
    }
}

impl EngineConfig {
    /// Check field ranges.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidHorizon` if `horizon_days` is below
    /// [`MIN_HORIZON_DAYS`].
    pub fn validate(&self) -> Result<()> {
        if self.horizon_days < MIN_HORIZON_DAYS {
            return Err(Error::InvalidHorizon(self.horizon_days));
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Schengen calculator configuration
#
# Days to project ahead from the rejoin date (default: 90, minimum: 2)
horizon_days = 90

# Stays whose exit date precedes their entry date:
#   "reject" = refuse the whole history (default)
#   "skip"   = ignore the row, it counts as zero days
inverted_intervals = "reject"
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or holds
    /// out-of-range values.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: EngineConfig = toml::from_str(&content).map_err(|e| {
            Error::config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                Error::config(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Serialization(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            Error::config(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
