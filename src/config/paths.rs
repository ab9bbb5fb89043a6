//! Path resolution for taskboard configuration and data files.
//!
//! All taskboard data is stored in `~/.taskboard/`:
//! - `config.yaml` - Main configuration file
//! - `tasks.json` - Default task snapshot

use std::path::PathBuf;

use crate::error::TaskboardError;

/// Paths to taskboard configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.taskboard/`
    pub root: PathBuf,
    /// Config file: `~/.taskboard/config.yaml`
    pub config_file: PathBuf,
    /// Default snapshot: `~/.taskboard/tasks.json`
    pub tasks_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TaskboardError> {
        let home = std::env::var("HOME").map_err(|_| {
            TaskboardError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".taskboard")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            tasks_file: root.join("tasks.json"),
            root,
        }
    }

    /// Ensure the root directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn ensure_dirs(&self) -> Result<(), TaskboardError> {
        std::fs::create_dir_all(&self.root).map_err(|e| {
            TaskboardError::Config(format!(
                "Failed to create directory {}: {e}",
                self.root.display()
            ))
        })
    }
}
