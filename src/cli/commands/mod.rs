//! Command implementations for taskboard.

mod board;
mod config;
mod stats;

pub use board::{board, move_task};
pub use config::config;
pub use stats::stats;

use std::path::PathBuf;

use crate::config::{Config, Paths};

/// Pick the task snapshot: `--tasks`, then `general.tasks_file`, then the
/// default file under the data directory.
#[must_use]
pub fn resolve_tasks_path(flag: Option<PathBuf>, config: &Config, paths: &Paths) -> PathBuf {
    flag.or_else(|| config.general.tasks_file.clone())
        .unwrap_or_else(|| paths.tasks_file.clone())
}
