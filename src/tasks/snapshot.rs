//! Task snapshot files.
//!
//! A snapshot is a JSON array of tasks, in display order. It stands in for
//! the persistence layer that feeds the engines in a deployed application.

use std::path::Path;

use tracing::debug;

use super::types::Task;
use crate::error::TaskboardError;

/// Load a task snapshot from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid task array.
pub fn load_tasks(path: &Path) -> Result<Vec<Task>, TaskboardError> {
    let contents = std::fs::read_to_string(path).map_err(|source| TaskboardError::SnapshotRead {
        path: path.to_path_buf(),
        source,
    })?;

    let tasks: Vec<Task> = serde_json::from_str(&contents)?;
    debug!(path = %path.display(), count = tasks.len(), "loaded task snapshot");
    Ok(tasks)
}

/// Write a task snapshot to a JSON file, replacing any existing content.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn save_tasks(path: &Path, tasks: &[Task]) -> Result<(), TaskboardError> {
    let contents = serde_json::to_string_pretty(tasks)?;
    std::fs::write(path, contents).map_err(|source| TaskboardError::SnapshotWrite {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), count = tasks.len(), "saved task snapshot");
    Ok(())
}
