//! Ordered-partition moves for the kanban board.
//!
//! The task list is one ordered sequence; each status column is the
//! subsequence of tasks sharing that status. Moves never mutate their input.
//! Anything that cannot be resolved (unknown ids, missing drop target) yields
//! an unchanged copy of the list, since drags routinely finish after the list
//! changed underneath them.

use tracing::debug;

use crate::tasks::{Status, Task};

/// What the pointer was over when a drag event fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// Another task card.
    Task(String),
    /// A column background, possibly empty.
    Column(Status),
}

impl DropTarget {
    /// Resolve a droppable id against the list.
    ///
    /// Task ids take precedence over column names.
    #[must_use]
    pub fn resolve(over_id: &str, tasks: &[Task]) -> Option<Self> {
        if tasks.iter().any(|t| t.id == over_id) {
            return Some(Self::Task(over_id.to_string()));
        }
        over_id.parse::<Status>().ok().map(Self::Column)
    }

    /// Status of the column this target sits in.
    #[must_use]
    pub fn status(&self, tasks: &[Task]) -> Option<Status> {
        match self {
            Self::Task(id) => tasks.iter().find(|t| &t.id == id).map(|t| t.status),
            Self::Column(status) => Some(*status),
        }
    }
}

/// One status column, in display order.
#[derive(Debug, Clone)]
pub struct Column<'a> {
    pub status: Status,
    pub tasks: Vec<&'a Task>,
}

/// Remove the element at `from` and insert it at `to`.
///
/// `to` indexes the list after removal, so moving forward lands the element
/// after the item that was at `to`. Out-of-range indices leave `items` as is.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from >= items.len() || to >= items.len() || from == to {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

/// Reorder inside one column: the active task takes the over task's index.
///
/// Returns the input unchanged when either id is unknown, the ids are equal,
/// or the two tasks are in different columns.
#[must_use]
pub fn move_within_partition(tasks: &[Task], active_id: &str, over_id: &str) -> Vec<Task> {
    let (Some(from), Some(to)) = (index_of(tasks, active_id), index_of(tasks, over_id)) else {
        debug!(active_id, over_id, "drop ignored: unknown task id");
        return tasks.to_vec();
    };
    if from == to {
        return tasks.to_vec();
    }
    if tasks[from].status != tasks[to].status {
        debug!(active_id, over_id, "drop ignored: tasks are in different columns");
        return tasks.to_vec();
    }

    let mut moved = tasks.to_vec();
    array_move(&mut moved, from, to);
    renumber_positions(&mut moved);
    moved
}

/// Move the active task into another column.
///
/// Over a task, the active task lands immediately before it. Over a column
/// background, it is appended after the column's last task, or keeps its list
/// index when the column is empty. Only `status` and `position` change.
#[must_use]
pub fn move_across_partition(tasks: &[Task], active_id: &str, target: &DropTarget) -> Vec<Task> {
    let Some(from) = index_of(tasks, active_id) else {
        debug!(active_id, "drop ignored: unknown active task");
        return tasks.to_vec();
    };
    let Some(target_status) = target.status(tasks) else {
        debug!(active_id, ?target, "drop ignored: unknown target task");
        return tasks.to_vec();
    };
    if target_status == tasks[from].status {
        debug!(active_id, ?target, "drop ignored: target is in the same column");
        return tasks.to_vec();
    }

    let mut moved = tasks.to_vec();
    let mut active = moved.remove(from);
    active.status = target_status;

    let insert_at = match target {
        DropTarget::Task(over_id) => index_of(&moved, over_id).unwrap_or(from),
        DropTarget::Column(status) => moved
            .iter()
            .rposition(|t| t.status == *status)
            .map_or(from, |last| last + 1),
    };
    moved.insert(insert_at.min(moved.len()), active);

    renumber_positions(&mut moved);
    debug!(active_id, to = %target_status, index = insert_at, "task moved across columns");
    moved
}

/// Apply a drop gesture.
///
/// `None` means the pointer was released outside any droppable; the list is
/// returned unchanged.
#[must_use]
pub fn apply_drop(tasks: &[Task], active_id: &str, over: Option<&DropTarget>) -> Vec<Task> {
    let Some(target) = over else {
        return tasks.to_vec();
    };
    let (Some(from), Some(target_status)) = (index_of(tasks, active_id), target.status(tasks)) else {
        debug!(active_id, ?target, "drop ignored: unresolvable ids");
        return tasks.to_vec();
    };

    match target {
        DropTarget::Task(over_id) if target_status == tasks[from].status => {
            move_within_partition(tasks, active_id, over_id)
        }
        _ => move_across_partition(tasks, active_id, target),
    }
}

/// Assign dense positions (0..n-1) within each column, following list order.
pub fn renumber_positions(tasks: &mut [Task]) {
    let mut next = [0u32; 3];
    for task in tasks.iter_mut() {
        let slot = &mut next[task.status.column()];
        task.position = *slot;
        *slot += 1;
    }
}

/// Rebuild list order from the `position` field, then renumber.
///
/// The result is grouped by column in column order. Ties keep list order.
#[must_use]
pub fn normalize(tasks: &[Task]) -> Vec<Task> {
    let mut ordered = tasks.to_vec();
    ordered.sort_by_key(|t| (t.status.column(), t.position));
    renumber_positions(&mut ordered);
    ordered
}

/// The three columns in display order, each sorted by position.
#[must_use]
pub fn columns(tasks: &[Task]) -> [Column<'_>; 3] {
    Status::ALL.map(|status| {
        let mut column_tasks: Vec<&Task> = tasks.iter().filter(|t| t.status == status).collect();
        column_tasks.sort_by_key(|t| t.position);
        Column {
            status,
            tasks: column_tasks,
        }
    })
}

fn index_of(tasks: &[Task], id: &str) -> Option<usize> {
    tasks.iter().position(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::Priority;
    use chrono::{DateTime, NaiveDate, Utc};

    fn make_task(id: &str, status: Status) -> Task {
        let at = "2024-01-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
        Task {
            id: id.to_string(),
            title: id.to_string(),
            description: None,
            status,
            priority: None,
            due_date: None,
            project_id: "p1".to_string(),
            created_at: at,
            updated_at: at,
            position: 0,
        }
    }

    fn board(spec: &[(&str, Status)]) -> Vec<Task> {
        let mut tasks: Vec<Task> = spec.iter().map(|(id, s)| make_task(id, *s)).collect();
        renumber_positions(&mut tasks);
        tasks
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    fn status_of(tasks: &[Task], id: &str) -> Status {
        tasks.iter().find(|t| t.id == id).unwrap().status
    }

    // ==================== array_move Tests ====================

    #[test]
    fn test_array_move_forward_and_back() {
        let mut items = vec!['a', 'b', 'c', 'd'];
        array_move(&mut items, 0, 2);
        assert_eq!(items, vec!['b', 'c', 'a', 'd']);

        array_move(&mut items, 3, 0);
        assert_eq!(items, vec!['d', 'b', 'c', 'a']);
    }

    #[test]
    fn test_array_move_out_of_range() {
        let mut items = vec![1, 2];
        array_move(&mut items, 5, 0);
        array_move(&mut items, 0, 5);
        assert_eq!(items, vec![1, 2]);
    }

    // ==================== Within Partition Tests ====================

    #[test]
    fn test_within_moves_forward() {
        let tasks = board(&[("A", Status::Todo), ("B", Status::Todo), ("C", Status::Todo)]);
        let moved = move_within_partition(&tasks, "A", "C");

        assert_eq!(ids(&moved), vec!["B", "C", "A"]);
        assert!(moved.iter().all(|t| t.status == Status::Todo));
        let positions: Vec<_> = moved.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_within_moves_backward() {
        let tasks = board(&[("A", Status::Todo), ("B", Status::Todo), ("C", Status::Todo)]);
        let moved = move_within_partition(&tasks, "C", "A");
        assert_eq!(ids(&moved), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_within_skips_other_columns() {
        let tasks = board(&[("A", Status::Todo), ("X", Status::Done), ("C", Status::Todo)]);
        let moved = move_within_partition(&tasks, "A", "C");

        assert_eq!(ids(&moved), vec!["X", "C", "A"]);
        let todo: Vec<_> = columns(&moved)[0].tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(todo, vec!["C", "A"]);
        assert_eq!(moved[0].position, 0);
    }

    #[test]
    fn test_within_same_id_is_noop() {
        let tasks = board(&[("A", Status::Todo), ("B", Status::Todo)]);
        assert_eq!(move_within_partition(&tasks, "A", "A"), tasks);
    }

    #[test]
    fn test_within_unknown_ids_are_noop() {
        let tasks = board(&[("A", Status::Todo), ("B", Status::Todo)]);
        assert_eq!(move_within_partition(&tasks, "Z", "B"), tasks);
        assert_eq!(move_within_partition(&tasks, "A", "Z"), tasks);
    }

    #[test]
    fn test_within_different_columns_is_noop() {
        let tasks = board(&[("A", Status::Todo), ("B", Status::Done)]);
        assert_eq!(move_within_partition(&tasks, "A", "B"), tasks);
    }

    // ==================== Across Partition Tests ====================

    #[test]
    fn test_across_onto_task() {
        let tasks = board(&[("A", Status::Todo), ("B", Status::Todo), ("C", Status::Done)]);
        let moved = move_across_partition(&tasks, "A", &DropTarget::Task("C".to_string()));

        assert_eq!(ids(&moved), vec!["B", "A", "C"]);
        assert_eq!(status_of(&moved, "A"), Status::Done);
        assert_eq!(status_of(&moved, "B"), Status::Todo);
        assert_eq!(status_of(&moved, "C"), Status::Done);

        let done: Vec<_> = columns(&moved)[2].tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(done, vec!["A", "C"]);
    }

    #[test]
    fn test_across_onto_task_moving_backward() {
        let tasks = board(&[("C", Status::Done), ("B", Status::Todo), ("A", Status::Todo)]);
        let moved = move_across_partition(&tasks, "A", &DropTarget::Task("C".to_string()));

        assert_eq!(ids(&moved), vec!["A", "C", "B"]);
        assert_eq!(status_of(&moved, "A"), Status::Done);
    }

    #[test]
    fn test_across_onto_column_appends() {
        let tasks = board(&[
            ("A", Status::Todo),
            ("D1", Status::Done),
            ("D2", Status::Done),
            ("B", Status::Todo),
        ]);
        let moved = move_across_partition(&tasks, "A", &DropTarget::Column(Status::Done));

        assert_eq!(ids(&moved), vec!["D1", "D2", "A", "B"]);
        let a = moved.iter().find(|t| t.id == "A").unwrap();
        assert_eq!((a.status, a.position), (Status::Done, 2));
    }

    #[test]
    fn test_across_onto_empty_column_keeps_index() {
        let tasks = board(&[("A", Status::Todo), ("B", Status::Todo), ("C", Status::Done)]);
        let moved = move_across_partition(&tasks, "B", &DropTarget::Column(Status::InProgress));

        assert_eq!(ids(&moved), vec!["A", "B", "C"]);
        let b = moved.iter().find(|t| t.id == "B").unwrap();
        assert_eq!((b.status, b.position), (Status::InProgress, 0));
    }

    #[test]
    fn test_across_keeps_other_fields() {
        let mut tasks = board(&[("A", Status::Todo), ("C", Status::Done)]);
        tasks[0].priority = Some(Priority::High);
        tasks[0].due_date = NaiveDate::from_ymd_opt(2024, 2, 1);
        let before = tasks[0].clone();

        let moved = move_across_partition(&tasks, "A", &DropTarget::Task("C".to_string()));
        let after = moved.iter().find(|t| t.id == "A").unwrap();

        assert_eq!(after.priority, before.priority);
        assert_eq!(after.due_date, before.due_date);
        assert_eq!(after.updated_at, before.updated_at);
        assert_eq!(after.title, before.title);
    }

    #[test]
    fn test_across_same_column_is_noop() {
        let tasks = board(&[("A", Status::Todo), ("B", Status::Todo)]);
        assert_eq!(move_across_partition(&tasks, "A", &DropTarget::Column(Status::Todo)), tasks);
        assert_eq!(move_across_partition(&tasks, "A", &DropTarget::Task("B".to_string())), tasks);
    }

    #[test]
    fn test_across_unknown_ids_are_noop() {
        let tasks = board(&[("A", Status::Todo), ("B", Status::Done)]);
        assert_eq!(move_across_partition(&tasks, "Z", &DropTarget::Column(Status::Done)), tasks);
        assert_eq!(move_across_partition(&tasks, "A", &DropTarget::Task("Z".to_string())), tasks);
    }

    #[test]
    fn test_across_does_not_mutate_input() {
        let tasks = board(&[("A", Status::Todo), ("B", Status::Done)]);
        let snapshot = tasks.clone();
        let _ = move_across_partition(&tasks, "A", &DropTarget::Column(Status::Done));
        assert_eq!(tasks, snapshot);
    }

    // ==================== apply_drop Tests ====================

    #[test]
    fn test_apply_drop_without_target_is_noop() {
        let tasks = board(&[("A", Status::Todo), ("B", Status::Done)]);
        assert_eq!(apply_drop(&tasks, "A", None), tasks);
    }

    #[test]
    fn test_apply_drop_dispatches() {
        let tasks = board(&[("A", Status::Todo), ("B", Status::Todo), ("C", Status::Done)]);

        let within = apply_drop(&tasks, "A", Some(&DropTarget::Task("B".to_string())));
        assert_eq!(ids(&within), vec!["B", "A", "C"]);

        let across = apply_drop(&tasks, "A", Some(&DropTarget::Task("C".to_string())));
        assert_eq!(status_of(&across, "A"), Status::Done);
    }

    #[test]
    fn test_apply_drop_status_tracks_column() {
        let tasks = board(&[
            ("A", Status::Todo),
            ("B", Status::InProgress),
            ("C", Status::Done),
            ("D", Status::Todo),
        ]);
        for target in ["B", "C", "todo", "in_progress", "done"] {
            let resolved = DropTarget::resolve(target, &tasks).unwrap();
            let moved = apply_drop(&tasks, "D", Some(&resolved));
            for column in columns(&moved) {
                assert!(column.tasks.iter().all(|t| t.status == column.status));
            }
            let expected = resolved.status(&tasks).unwrap();
            assert_eq!(status_of(&moved, "D"), expected);
            for other in ["A", "B", "C"] {
                assert_eq!(status_of(&moved, other), status_of(&tasks, other));
            }
        }
    }

    // ==================== DropTarget Tests ====================

    #[test]
    fn test_resolve_prefers_task_ids() {
        let tasks = board(&[("done", Status::Todo)]);
        assert_eq!(DropTarget::resolve("done", &tasks), Some(DropTarget::Task("done".to_string())));
    }

    #[test]
    fn test_resolve_column_and_unknown() {
        let tasks = board(&[("A", Status::Todo)]);
        assert_eq!(
            DropTarget::resolve("in_progress", &tasks),
            Some(DropTarget::Column(Status::InProgress))
        );
        assert_eq!(DropTarget::resolve("nowhere", &tasks), None);
    }

    // ==================== Position Tests ====================

    #[test]
    fn test_renumber_positions_per_column() {
        let tasks = board(&[
            ("A", Status::Todo),
            ("B", Status::Done),
            ("C", Status::Todo),
            ("D", Status::Done),
        ]);
        let positions: Vec<_> = tasks.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 0, 1, 1]);
    }

    #[test]
    fn test_normalize_orders_by_position() {
        let mut tasks = vec![
            make_task("B", Status::Todo),
            make_task("X", Status::Done),
            make_task("A", Status::Todo),
        ];
        tasks[0].position = 7;
        tasks[1].position = 3;
        tasks[2].position = 2;

        let normalized = normalize(&tasks);
        assert_eq!(ids(&normalized), vec!["A", "B", "X"]);
        let positions: Vec<_> = normalized.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 1, 0]);
    }

    #[test]
    fn test_columns_always_three() {
        let cols = columns(&[]);
        let statuses: Vec<_> = cols.iter().map(|c| c.status).collect();
        assert_eq!(statuses, Status::ALL.to_vec());
        assert!(cols.iter().all(|c| c.tasks.is_empty()));
    }
}
