use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::core::MAX_WINDOW_DAYS;

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(about = "Task statistics and kanban ordering for task snapshots")]
#[command(long_about = "taskboard - task statistics and kanban ordering

Reads a JSON snapshot of tasks and derives dashboard statistics
(counters, distributions, burndown, activity) or applies kanban
drag-and-drop moves to it.

QUICK START:
  taskboard stats                   Dashboard for the last 7 days
  taskboard stats --as-of 2024-01-05 burndown
  taskboard board                   Show the three columns
  taskboard move t1 done            Move task t1 to the Done column

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Task snapshot (JSON array of tasks)
    ///
    /// Falls back to `general.tasks_file` from the config file, then to
    /// ~/.taskboard/tasks.json.
    #[arg(long, global = true, env = "TASKBOARD_TASKS")]
    pub tasks: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Task statistics
    ///
    /// Computes counters, status and priority distributions, and the
    /// burndown and activity series over a trailing window ending on the
    /// evaluation day. All days are UTC.
    ///
    /// # Examples
    ///
    ///   taskboard stats
    ///   taskboard stats --as-of 2024-01-05 --window 14
    ///   taskboard stats burndown -o json
    Stats(StatsArgs),

    /// Show the kanban columns
    ///
    /// Tasks are grouped by status and ordered by position.
    Board,

    /// Apply a drag-and-drop move
    ///
    /// OVER is a task id or a column name (todo, in_progress, done).
    /// Omitting it models a drop outside any column and changes nothing.
    /// Unknown ids are ignored.
    ///
    /// # Examples
    ///
    ///   taskboard move t1 t3          Drop t1 onto task t3
    ///   taskboard move t1 done        Drop t1 onto the Done column
    ///   taskboard move t1 done --write
    #[command(alias = "mv")]
    Move(MoveArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct StatsArgs {
    /// Evaluation instant: now, today, yesterday, "3 days ago",
    /// YYYY-MM-DD, or RFC 3339. Defaults to now.
    #[arg(long, global = true)]
    pub as_of: Option<String>,

    /// Days in the burndown and activity windows
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_WINDOW_DAYS)))]
    pub window: Option<u32>,

    #[command(subcommand)]
    pub command: Option<StatsCommands>,
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatsCommands {
    /// Full dashboard (default)
    Dashboard,
    /// Remaining tasks per day
    Burndown,
    /// Created vs completed per day
    Activity,
    /// Status and priority distributions
    Distribution,
    /// Per-project counters
    Projects,
}

#[derive(Args)]
pub struct MoveArgs {
    /// Id of the dragged task
    pub active: String,

    /// Task id or column the task was dropped on
    pub over: Option<String>,

    /// Save the resulting order back to the snapshot
    #[arg(long)]
    pub write: bool,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
