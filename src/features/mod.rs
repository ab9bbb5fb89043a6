//! Feature modules for taskboard.
//!
//! - `stats`: dashboard statistics and charts
//! - `kanban`: drag-and-drop column ordering

pub mod kanban;
pub mod stats;
