//! Status and position changes between two arrangements.
//!
//! This is what a persistence layer needs to write back after a drop.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::tasks::{Status, Task};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition<T> {
    pub from: T,
    pub to: T,
}

/// One task whose column or position moved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskChange {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Transition<Status>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Transition<u32>>,
}

/// Tasks in `after` whose status or position differs from `before`.
///
/// Tasks missing from either side are not reported. Output follows `after`.
#[must_use]
pub fn diff(before: &[Task], after: &[Task]) -> Vec<TaskChange> {
    let previous: HashMap<&str, &Task> = before.iter().map(|t| (t.id.as_str(), t)).collect();

    after
        .iter()
        .filter_map(|task| {
            let old = previous.get(task.id.as_str())?;
            let status = (old.status != task.status).then_some(Transition {
                from: old.status,
                to: task.status,
            });
            let position = (old.position != task.position).then_some(Transition {
                from: old.position,
                to: task.position,
            });

            (status.is_some() || position.is_some()).then(|| TaskChange {
                id: task.id.clone(),
                status,
                position,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::kanban::{move_across_partition, renumber_positions, DropTarget};
    use chrono::{DateTime, Utc};

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

    #[test]
    fn test_diff_identical_is_empty() {
        let mut tasks = vec![make_task("A", Status::Todo), make_task("B", Status::Todo)];
        renumber_positions(&mut tasks);
        assert!(diff(&tasks, &tasks).is_empty());
    }

    #[test]
    fn test_diff_after_cross_column_move() {
        let mut before = vec![
            make_task("A", Status::Todo),
            make_task("B", Status::Todo),
            make_task("C", Status::Done),
        ];
        renumber_positions(&mut before);
        let after = move_across_partition(&before, "A", &DropTarget::Task("C".to_string()));

        let changes = diff(&before, &after);
        let ids: Vec<_> = changes.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A", "C"]);

        assert_eq!(changes[0].status, None);
        assert_eq!(changes[0].position, Some(Transition { from: 1, to: 0 }));
        assert_eq!(
            changes[1].status,
            Some(Transition {
                from: Status::Todo,
                to: Status::Done
            })
        );
        assert_eq!(changes[1].position, None);
        assert_eq!(changes[2].position, Some(Transition { from: 0, to: 1 }));
    }

    #[test]
    fn test_diff_ignores_removed_and_added() {
        let before = vec![make_task("A", Status::Todo)];
        let after = vec![make_task("B", Status::Done)];
        assert!(diff(&before, &after).is_empty());
    }

    #[test]
    fn test_diff_serializes_only_changed_fields() {
        let change = TaskChange {
            id: "A".to_string(),
            status: None,
            position: Some(Transition { from: 0, to: 2 }),
        };
        let json = serde_json::to_value(&change).unwrap();
        assert_eq!(json, serde_json::json!({"id": "A", "position": {"from": 0, "to": 2}}));
    }
}
