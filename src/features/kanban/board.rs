//! Drag gesture state for a kanban board.
//!
//! `Idle -> Dragging -> Idle`. While dragging, every drag-over event
//! recomputes a full candidate arrangement from the committed list, so hover
//! events never accumulate. The committed list only changes on `end_drag`.

use tracing::debug;

use super::partition::{apply_drop, columns, renumber_positions, Column, DropTarget};
use crate::tasks::Task;

/// An in-flight drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub active_id: String,
    /// Arrangement for the most recent drag-over target
    pub candidate: Vec<Task>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// A task list plus the drag gesture currently applied to it.
#[derive(Debug, Clone, Default)]
pub struct KanbanBoard {
    tasks: Vec<Task>,
    state: DragState,
}

impl KanbanBoard {
    /// Create a board; positions are renumbered from list order.
    #[must_use]
    pub fn new(mut tasks: Vec<Task>) -> Self {
        renumber_positions(&mut tasks);
        Self {
            tasks,
            state: DragState::Idle,
        }
    }

    /// Committed task list.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }

    /// What should be rendered: the candidate while dragging, else the
    /// committed list.
    #[must_use]
    pub fn visible_tasks(&self) -> &[Task] {
        match &self.state {
            DragState::Dragging(session) => &session.candidate,
            DragState::Idle => &self.tasks,
        }
    }

    #[must_use]
    pub fn columns(&self) -> [Column<'_>; 3] {
        columns(self.visible_tasks())
    }

    #[must_use]
    pub fn state(&self) -> &DragState {
        &self.state
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Swap in a fresh snapshot, e.g. after an external delete.
    ///
    /// A drag in progress keeps going; its candidate is reset to the new list.
    pub fn replace_tasks(&mut self, mut tasks: Vec<Task>) {
        renumber_positions(&mut tasks);
        if let DragState::Dragging(session) = &mut self.state {
            session.candidate = tasks.clone();
        }
        self.tasks = tasks;
    }

    /// Begin dragging `active_id`. Returns `false` and stays idle when the
    /// task is unknown.
    pub fn start_drag(&mut self, active_id: &str) -> bool {
        if !self.tasks.iter().any(|t| t.id == active_id) {
            debug!(active_id, "drag start ignored: unknown task");
            return false;
        }
        debug!(active_id, "drag started");
        self.state = DragState::Dragging(DragSession {
            active_id: active_id.to_string(),
            candidate: self.tasks.clone(),
        });
        true
    }

    /// Recompute the candidate for the task or column under the pointer.
    pub fn drag_over(&mut self, over_id: &str) -> &[Task] {
        if let DragState::Dragging(session) = &mut self.state {
            let target = DropTarget::resolve(over_id, &self.tasks);
            session.candidate = apply_drop(&self.tasks, &session.active_id, target.as_ref());
        }
        self.visible_tasks()
    }

    /// Finish the gesture and commit the arrangement for `over_id`.
    ///
    /// `None` (released outside any droppable) leaves the list unchanged.
    pub fn end_drag(&mut self, over_id: Option<&str>) -> &[Task] {
        let DragState::Dragging(session) = std::mem::take(&mut self.state) else {
            return &self.tasks;
        };

        match over_id {
            Some(over_id) => {
                let target = DropTarget::resolve(over_id, &self.tasks);
                self.tasks = apply_drop(&self.tasks, &session.active_id, target.as_ref());
                debug!(active_id = %session.active_id, over_id, "drag committed");
            }
            None => debug!(active_id = %session.active_id, "drag ended without target"),
        }
        &self.tasks
    }

    /// Abort the gesture, discarding the candidate.
    pub fn cancel_drag(&mut self) {
        if let DragState::Dragging(session) = std::mem::take(&mut self.state) {
            debug!(active_id = %session.active_id, "drag cancelled");
        }
    }
}
