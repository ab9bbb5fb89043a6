//! Statistics command implementation.

use std::path::Path;

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde_json::json;

use crate::cli::args::{OutputFormat, StatsArgs, StatsCommands};
use crate::config::Config;
use crate::core::parse_as_of;
use crate::error::TaskboardError;
use crate::features::stats::{
    render_bar_chart, render_progress_bar, render_sparkline, StatsOptions, TaskStatistics,
};
use crate::output::to_json;
use crate::tasks::load_tasks;

/// Execute the stats command.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be loaded or `--as-of` is invalid.
pub fn stats(
    tasks_path: &Path,
    config: &Config,
    args: &StatsArgs,
    format: OutputFormat,
) -> Result<String, TaskboardError> {
    let as_of = resolve_as_of(args.as_of.as_deref(), Utc::now())?;
    let options = args
        .window
        .map_or_else(|| config.stats.options(), |window_days| StatsOptions { window_days });

    let tasks = load_tasks(tasks_path)?;
    let stats = TaskStatistics::compute_with(&tasks, as_of, &options);

    match args.command.unwrap_or(StatsCommands::Dashboard) {
        StatsCommands::Dashboard => render_dashboard(&stats, as_of, format),
        StatsCommands::Burndown => render_burndown(&stats, format),
        StatsCommands::Activity => render_activity(&stats, format),
        StatsCommands::Distribution => render_distribution(&stats, format),
        StatsCommands::Projects => render_projects(&stats, format),
    }
}

fn resolve_as_of(input: Option<&str>, now: DateTime<Utc>) -> Result<DateTime<Utc>, TaskboardError> {
    match input {
        None => Ok(now),
        Some(raw) => parse_as_of(raw, now)
            .ok_or_else(|| TaskboardError::InvalidArgument(format!("Unrecognized --as-of value: {raw}"))),
    }
}

fn render_dashboard(
    stats: &TaskStatistics,
    as_of: DateTime<Utc>,
    format: OutputFormat,
) -> Result<String, TaskboardError> {
    match format {
        OutputFormat::Json => to_json(stats),
        OutputFormat::Pretty => {
            let mut output = Vec::new();

            output.push(format!("📊 Task Dashboard ({})", as_of.format("%Y-%m-%d")).bold().to_string());
            output.push("═".repeat(50));
            output.push(format!(
                "  Total: {}  Completed: {}  Pending: {}  Overdue: {}",
                stats.total_tasks,
                stats.completed_tasks.to_string().green(),
                stats.pending_tasks.to_string().yellow(),
                if stats.overdue_tasks > 0 {
                    stats.overdue_tasks.to_string().red().to_string()
                } else {
                    "0".green().to_string()
                }
            ));
            output.push(format!("  Completion: {}", render_progress_bar(stats.completion_rate, 20)));
            output.push(String::new());

            output.push("STATUS".bold().to_string());
            output.push(render_bar_chart(&stats.status_distribution, 12, 24));
            output.push(String::new());

            output.push("PRIORITY".bold().to_string());
            output.push(render_bar_chart(&stats.priority_distribution, 12, 24));
            output.push(String::new());

            let remaining: Vec<i64> = stats.burndown_data.iter().map(|p| p.remaining).collect();
            let completed: Vec<i64> = stats
                .activity_data
                .iter()
                .map(|p| i64::try_from(p.completed).unwrap_or(i64::MAX))
                .collect();
            output.push(format!("  Remaining: {}", render_sparkline(&remaining)));
            output.push(format!("  Completed: {}", render_sparkline(&completed)));

            Ok(output.join("\n"))
        }
    }
}

fn render_burndown(stats: &TaskStatistics, format: OutputFormat) -> Result<String, TaskboardError> {
    match format {
        OutputFormat::Json => to_json(&stats.burndown_data),
        OutputFormat::Pretty => {
            let mut output = Vec::new();

            output.push(format!("📉 Burndown (Last {} days)", stats.burndown_data.len()).bold().to_string());
            output.push("═".repeat(50));
            output.push(format!("{:<8} {:>8} {:>10} {:>10}", "Day", "Created", "Completed", "Remaining"));
            output.push("─".repeat(50));

            for point in &stats.burndown_data {
                let remaining = if point.remaining < 0 {
                    point.remaining.to_string().red().to_string()
                } else {
                    point.remaining.to_string()
                };
                output.push(format!(
                    "{:<8} {:>8} {:>10} {:>10}",
                    point.label, point.created, point.completed, remaining
                ));
            }

            let values: Vec<i64> = stats.burndown_data.iter().map(|p| p.remaining).collect();
            output.push(String::new());
            output.push(format!("Trend: {}", render_sparkline(&values)));

            Ok(output.join("\n"))
        }
    }
}

fn render_activity(stats: &TaskStatistics, format: OutputFormat) -> Result<String, TaskboardError> {
    match format {
        OutputFormat::Json => to_json(&stats.activity_data),
        OutputFormat::Pretty => {
            let mut output = Vec::new();

            output.push(format!("📈 Activity (Last {} days)", stats.activity_data.len()).bold().to_string());
            output.push("═".repeat(50));
            output.push(format!("{:<8} {:>8} {:>10}", "Day", "Created", "Completed"));
            output.push("─".repeat(50));

            for point in &stats.activity_data {
                output.push(format!(
                    "{:<8} {:>8} {:>10}",
                    point.label,
                    point.created,
                    point.completed.to_string().green()
                ));
            }

            let created: usize = stats.activity_data.iter().map(|p| p.created).sum();
            let completed: usize = stats.activity_data.iter().map(|p| p.completed).sum();
            output.push(String::new());
            output.push(format!("Total created: {created}  Total completed: {completed}"));

            Ok(output.join("\n"))
        }
    }
}

fn render_distribution(stats: &TaskStatistics, format: OutputFormat) -> Result<String, TaskboardError> {
    match format {
        OutputFormat::Json => to_json(&json!({
            "status": stats.status_distribution,
            "priority": stats.priority_distribution,
        })),
        OutputFormat::Pretty => {
            let mut output = Vec::new();

            output.push("🗂  By Status".bold().to_string());
            output.push("─".repeat(40));
            output.push(render_bar_chart(&stats.status_distribution, 12, 24));
            output.push(String::new());
            output.push("🚩 By Priority".bold().to_string());
            output.push("─".repeat(40));
            output.push(render_bar_chart(&stats.priority_distribution, 12, 24));

            Ok(output.join("\n"))
        }
    }
}

fn render_projects(stats: &TaskStatistics, format: OutputFormat) -> Result<String, TaskboardError> {
    match format {
        OutputFormat::Json => to_json(&stats.project_breakdown),
        OutputFormat::Pretty => {
            let mut output = Vec::new();

            output.push("📁 Project Statistics".bold().to_string());
            output.push("═".repeat(60));

            if stats.project_breakdown.is_empty() {
                output.push("No projects found.".dimmed().to_string());
                return Ok(output.join("\n"));
            }

            output.push(format!(
                "{:<25} {:>6} {:>6} {:>8} {:>7}",
                "Project", "Total", "Done", "Rate", "Overdue"
            ));
            output.push("─".repeat(60));

            for pm in &stats.project_breakdown {
                let name: String = pm.project_id.chars().take(24).collect();
                let rate = format!("{}%", pm.completion_rate);
                let overdue = if pm.overdue > 0 {
                    pm.overdue.to_string().red().to_string()
                } else {
                    "0".to_string()
                };

                output.push(format!(
                    "{:<25} {:>6} {:>6} {:>8} {:>7}",
                    name, pm.total, pm.completed, rate, overdue
                ));
            }

            Ok(output.join("\n"))
        }
    }
}
