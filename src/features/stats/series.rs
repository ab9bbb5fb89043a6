//! Per-day burndown and activity series over a trailing window.
//!
//! `updated_at` of a done task is used as its completion day. A task edited
//! again after being closed therefore moves its apparent completion forward.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{day_label, trailing_days};
use crate::tasks::Task;

/// Cumulative state of the board at the end of one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurndownPoint {
    pub date: NaiveDate,
    pub label: String,
    /// Tasks created on or before `date`
    pub created: usize,
    /// Done tasks last updated on or before `date`
    pub completed: usize,
    /// `created - completed`; negative when completion precedes creation
    pub remaining: i64,
}

/// Tasks created and completed on exactly one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityPoint {
    pub date: NaiveDate,
    pub label: String,
    pub created: usize,
    pub completed: usize,
}

/// Burndown series for the `window_days` days ending on `today`.
#[must_use]
pub fn burndown(tasks: &[Task], today: NaiveDate, window_days: u32) -> Vec<BurndownPoint> {
    trailing_days(today, window_days)
        .into_iter()
        .map(|day| {
            let created = tasks.iter().filter(|t| t.created_on() <= day).count();
            let completed = tasks
                .iter()
                .filter(|t| t.is_done() && t.updated_on() <= day)
                .count();

            BurndownPoint {
                date: day,
                label: day_label(day),
                created,
                completed,
                remaining: signed(created) - signed(completed),
            }
        })
        .collect()
}

/// Activity series for the `window_days` days ending on `today`.
#[must_use]
pub fn activity(tasks: &[Task], today: NaiveDate, window_days: u32) -> Vec<ActivityPoint> {
    trailing_days(today, window_days)
        .into_iter()
        .map(|day| ActivityPoint {
            date: day,
            label: day_label(day),
            created: tasks.iter().filter(|t| t.created_on() == day).count(),
            completed: tasks
                .iter()
                .filter(|t| t.is_done() && t.updated_on() == day)
                .count(),
        })
        .collect()
}

fn signed(count: usize) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}
