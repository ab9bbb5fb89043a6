//! Fixed-bucket status and priority distributions.

use serde::{Deserialize, Serialize};

use crate::tasks::{Priority, Status, Task};

/// One named slice of a distribution chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionBucket {
    /// Display name
    pub name: String,
    /// Number of tasks in the bucket
    pub value: usize,
    /// Chart colour slot
    pub fill: String,
}

impl DistributionBucket {
    fn new(name: &str, value: usize, slot: usize) -> Self {
        Self {
            name: name.to_string(),
            value,
            fill: chart_fill(slot),
        }
    }
}

/// Design-system colour for chart slot `n` (1-based).
#[must_use]
pub fn chart_fill(slot: usize) -> String {
    format!("hsl(var(--chart-{slot}))")
}

/// Label of the bucket for tasks without a priority.
pub const NO_PRIORITY_LABEL: &str = "None";

/// Counts per status, always `[todo, in_progress, done]`.
#[must_use]
pub fn status_distribution(tasks: &[Task]) -> Vec<DistributionBucket> {
    let mut counts = [0usize; 3];
    for task in tasks {
        counts[task.status.column()] += 1;
    }

    Status::ALL
        .iter()
        .map(|status| DistributionBucket::new(status.label(), counts[status.column()], status.column() + 1))
        .collect()
}

/// Counts per priority, always `[high, medium, low, none]`.
#[must_use]
pub fn priority_distribution(tasks: &[Task]) -> Vec<DistributionBucket> {
    let count = |priority: Option<Priority>| tasks.iter().filter(|t| t.priority == priority).count();

    let mut buckets: Vec<DistributionBucket> = Priority::ALL
        .iter()
        .enumerate()
        .map(|(i, priority)| DistributionBucket::new(priority.label(), count(Some(*priority)), i + 1))
        .collect();
    buckets.push(DistributionBucket::new(NO_PRIORITY_LABEL, count(None), buckets.len() + 1));
    buckets
}
