//! Board and move command implementations.

use std::path::Path;

use tracing::info;

use crate::cli::args::{MoveArgs, OutputFormat};
use crate::error::TaskboardError;
use crate::features::kanban::{diff, normalize, KanbanBoard};
use crate::output::{format_columns, format_move};
use crate::tasks::{load_tasks, save_tasks};

/// Execute the board command.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be loaded or formatting fails.
pub fn board(tasks_path: &Path, format: OutputFormat) -> Result<String, TaskboardError> {
    let board = KanbanBoard::new(normalize(&load_tasks(tasks_path)?));
    format_columns(&board.columns(), format)
}

/// Execute the move command.
///
/// The drop is replayed as a full drag gesture: start on `active`, end over
/// `over`. Unknown ids leave the board unchanged.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be loaded or written back.
pub fn move_task(tasks_path: &Path, args: &MoveArgs, format: OutputFormat) -> Result<String, TaskboardError> {
    let before = normalize(&load_tasks(tasks_path)?);
    let mut board = KanbanBoard::new(before.clone());

    if board.start_drag(&args.active) {
        if let Some(over) = args.over.as_deref() {
            board.drag_over(over);
        }
        board.end_drag(args.over.as_deref());
    }

    let changes = diff(&before, board.tasks());
    if args.write && !changes.is_empty() {
        save_tasks(tasks_path, board.tasks())?;
        info!(path = %tasks_path.display(), changes = changes.len(), "snapshot updated");
    }

    format_move(board.tasks(), &board.columns(), &changes, format)
}
