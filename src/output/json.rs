//! JSON output formatting for taskboard.

use serde::Serialize;
use serde_json::json;

use crate::error::TaskboardError;
use crate::features::kanban::{Column, TaskChange};
use crate::tasks::Task;

/// Format board columns as JSON
///
/// # Errors
///
/// Returns `TaskboardError::Parse` if JSON serialization fails.
pub fn format_columns_json(columns: &[Column<'_>]) -> Result<String, TaskboardError> {
    let columns: Vec<_> = columns
        .iter()
        .map(|column| {
            json!({
                "status": column.status,
                "count": column.tasks.len(),
                "items": column.tasks,
            })
        })
        .collect();
    Ok(serde_json::to_string_pretty(&json!({ "columns": columns }))?)
}

/// Format the result of a move as JSON
///
/// # Errors
///
/// Returns `TaskboardError::Parse` if JSON serialization fails.
pub fn format_move_json(tasks: &[Task], changes: &[TaskChange]) -> Result<String, TaskboardError> {
    let output = json!({
        "changed": !changes.is_empty(),
        "changes": changes,
        "tasks": tasks,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `TaskboardError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, TaskboardError> {
    Ok(serde_json::to_string_pretty(value)?)
}
