//! Kanban board ordering.
//!
//! Tasks are kept in one ordered list partitioned into status columns.
//! Drag-and-drop moves reorder within a column or move a task to another
//! column, keeping `status` and `position` in sync with where it sits.

pub mod board;
pub mod changes;
pub mod partition;

pub use board::{DragSession, DragState, KanbanBoard};
pub use changes::{diff, TaskChange, Transition};
pub use partition::{
    apply_drop, array_move, columns, move_across_partition, move_within_partition, normalize,
    renumber_positions, Column, DropTarget,
};
