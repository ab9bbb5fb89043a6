//! taskboard - task statistics and kanban ordering
//!
//! This crate derives dashboard statistics from a task snapshot and keeps a
//! kanban board's status columns consistent under drag-and-drop moves. Both
//! engines are pure: they take an immutable snapshot and return new values.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod output;
pub mod tasks;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::TaskboardError;
pub use features::kanban::{DropTarget, KanbanBoard};
pub use features::stats::TaskStatistics;
pub use tasks::{Priority, Status, Task};
