//! Output formatting for taskboard.
//!
//! This module provides formatters for displaying boards and moves in
//! various formats. Statistics views are rendered by the stats command.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::TaskboardError;
use crate::features::kanban::{Column, TaskChange};
use crate::tasks::Task;

pub use json::*;
pub use pretty::*;

/// Format board columns based on output format
///
/// # Errors
///
/// Returns `TaskboardError::Parse` if JSON serialization fails.
pub fn format_columns(columns: &[Column<'_>], format: OutputFormat) -> Result<String, TaskboardError> {
    match format {
        OutputFormat::Pretty => Ok(format_columns_pretty(columns)),
        OutputFormat::Json => format_columns_json(columns),
    }
}

/// Format the outcome of a move based on output format
///
/// Pretty output shows the changes followed by the resulting board.
///
/// # Errors
///
/// Returns `TaskboardError::Parse` if JSON serialization fails.
pub fn format_move(
    tasks: &[Task],
    columns: &[Column<'_>],
    changes: &[TaskChange],
    format: OutputFormat,
) -> Result<String, TaskboardError> {
    match format {
        OutputFormat::Pretty => Ok(format!(
            "{}\n\n{}",
            format_changes_pretty(changes),
            format_columns_pretty(columns)
        )),
        OutputFormat::Json => format_move_json(tasks, changes),
    }
}
