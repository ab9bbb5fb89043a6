//! Aggregate task statistics.
//!
//! Every call is a full recomputation over the complete task set. The
//! evaluation instant is always passed in; nothing here reads the clock.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::trace;

use super::distribution::{priority_distribution, status_distribution, DistributionBucket};
use super::series::{activity, burndown, ActivityPoint, BurndownPoint};
use crate::tasks::Task;

pub use crate::core::MAX_WINDOW_DAYS;

/// Default length of the burndown and activity windows.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Tunables for [`TaskStatistics::compute_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsOptions {
    /// Number of days in the trailing window, including the evaluation day.
    /// Clamped to `1..=MAX_WINDOW_DAYS`.
    pub window_days: u32,
}

impl Default for StatsOptions {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}

/// Dashboard statistics for a task snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStatistics {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub pending_tasks: usize,
    pub overdue_tasks: usize,
    /// Integer percent, 0 for an empty snapshot
    pub completion_rate: u8,
    pub status_distribution: Vec<DistributionBucket>,
    pub priority_distribution: Vec<DistributionBucket>,
    pub burndown_data: Vec<BurndownPoint>,
    pub activity_data: Vec<ActivityPoint>,
    /// Per-project counters, sorted by project id
    pub project_breakdown: Vec<ProjectMetrics>,
}

impl TaskStatistics {
    /// Compute statistics as of `as_of` with the default 7-day window.
    #[must_use]
    pub fn compute(tasks: &[Task], as_of: DateTime<Utc>) -> Self {
        Self::compute_with(tasks, as_of, &StatsOptions::default())
    }

    /// Compute statistics as of `as_of` with explicit options.
    #[must_use]
    pub fn compute_with(tasks: &[Task], as_of: DateTime<Utc>, options: &StatsOptions) -> Self {
        let today = as_of.date_naive();
        let counts = Counts::tally(tasks.iter(), today);

        trace!(
            total = counts.total,
            completed = counts.completed,
            window_days = options.window_days,
            %today,
            "computing task statistics"
        );

        Self {
            total_tasks: counts.total,
            completed_tasks: counts.completed,
            pending_tasks: counts.total - counts.completed,
            overdue_tasks: counts.overdue,
            completion_rate: completion_rate(counts.completed, counts.total),
            status_distribution: status_distribution(tasks),
            priority_distribution: priority_distribution(tasks),
            burndown_data: burndown(tasks, today, options.window_days),
            activity_data: activity(tasks, today, options.window_days),
            project_breakdown: ProjectMetrics::calculate_all(tasks, today),
        }
    }
}

/// Counters for a single project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMetrics {
    pub project_id: String,
    pub total: usize,
    pub completed: usize,
    pub overdue: usize,
    pub completion_rate: u8,
}

impl ProjectMetrics {
    /// Calculate metrics for every project present in `tasks`.
    #[must_use]
    pub fn calculate_all(tasks: &[Task], today: NaiveDate) -> Vec<Self> {
        let mut by_project: BTreeMap<&str, Vec<&Task>> = BTreeMap::new();
        for task in tasks {
            by_project.entry(task.project_id.as_str()).or_default().push(task);
        }

        by_project
            .into_iter()
            .map(|(project_id, project_tasks)| {
                let counts = Counts::tally(project_tasks.into_iter(), today);
                Self {
                    project_id: project_id.to_string(),
                    total: counts.total,
                    completed: counts.completed,
                    overdue: counts.overdue,
                    completion_rate: completion_rate(counts.completed, counts.total),
                }
            })
            .collect()
    }
}

/// Percentage of `completed` over `total`, rounded half up; 0 when empty.
#[must_use]
pub fn completion_rate(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let percent = (completed as f64 * 100.0 / total as f64).round();
    percent.clamp(0.0, 100.0) as u8
}

#[derive(Default)]
struct Counts {
    total: usize,
    completed: usize,
    overdue: usize,
}

impl Counts {
    fn tally<'a>(tasks: impl Iterator<Item = &'a Task>, today: NaiveDate) -> Self {
        tasks.fold(Self::default(), |mut acc, task| {
            acc.total += 1;
            if task.is_done() {
                acc.completed += 1;
            }
            if task.is_overdue(today) {
                acc.overdue += 1;
            }
            acc
        })
    }
}
