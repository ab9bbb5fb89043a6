//! Task statistics for the analytics dashboard.
//!
//! Derives from a flat task snapshot:
//! - Completion counters and rate
//! - Status and priority distributions
//! - Burndown and activity series over a trailing window
//! - Per-project breakdown

pub mod distribution;
pub mod metrics;
pub mod series;
pub mod visualization;

pub use distribution::{chart_fill, priority_distribution, status_distribution, DistributionBucket};
pub use metrics::{
    completion_rate, ProjectMetrics, StatsOptions, TaskStatistics, DEFAULT_WINDOW_DAYS,
    MAX_WINDOW_DAYS,
};
pub use series::{activity, burndown, ActivityPoint, BurndownPoint};
pub use visualization::{render_bar_chart, render_progress_bar, render_sparkline};
