//! Configuration settings for taskboard.
//!
//! Settings are loaded from `~/.taskboard/config.yaml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::error::TaskboardError;
use crate::features::stats::{StatsOptions, DEFAULT_WINDOW_DAYS};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Statistics settings.
    pub stats: StatsConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Task snapshot used when `--tasks` is not given.
    #[serde(default)]
    pub tasks_file: Option<PathBuf>,
}

/// Statistics settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Days in the burndown and activity windows.
    #[serde(default = "default_window_days")]
    pub window_days: u32,
}

const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_window_days() -> u32 {
    DEFAULT_WINDOW_DAYS
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            tasks_file: None,
        }
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
        }
    }
}

impl StatsConfig {
    #[must_use]
    pub const fn options(&self) -> StatsOptions {
        StatsOptions {
            window_days: self.window_days,
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, TaskboardError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            TaskboardError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            TaskboardError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), TaskboardError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| TaskboardError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            TaskboardError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}
