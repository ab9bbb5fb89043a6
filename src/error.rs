//! Error types for taskboard.
//!
//! The statistics and reordering engines are total and never fail; these
//! errors come from the shell around them (snapshot files, config, CLI input).

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for taskboard operations.
#[derive(Error, Debug)]
pub enum TaskboardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to read task snapshot {path}: {source}")]
    SnapshotRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write task snapshot {path}: {source}")]
    SnapshotWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_argument() {
        let err = TaskboardError::InvalidArgument("bad date".to_string());
        assert_eq!(err.to_string(), "Invalid argument: bad date");
    }

    #[test]
    fn test_error_display_snapshot_read() {
        let err = TaskboardError::SnapshotRead {
            path: PathBuf::from("/tmp/tasks.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read task snapshot /tmp/tasks.json: missing"
        );
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: TaskboardError = json_err.into();
        assert!(matches!(err, TaskboardError::Parse(_)));
    }
}
