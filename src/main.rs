use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use taskboard::cli::args::{Cli, Commands};
use taskboard::cli::commands;
use taskboard::config::{Config, Paths};

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Tracing is opt-in via `RUST_LOG` and always goes to stderr.
fn init_tracing() {
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|raw| {
            let raw = raw.trim();
            if raw.is_empty() {
                return None;
            }
            EnvFilter::try_new(raw).ok()
        })
        .unwrap_or_else(|| EnvFilter::new("off"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = Paths::new()?;
    let config = Config::load_from_path(&paths.config_file)?;
    let format = cli.output.unwrap_or(config.general.default_output);
    let tasks_path = commands::resolve_tasks_path(cli.tasks, &config, &paths);

    let output = match cli.command {
        Commands::Stats(args) => commands::stats(&tasks_path, &config, &args, format)?,
        Commands::Board => commands::board(&tasks_path, format)?,
        Commands::Move(args) => commands::move_task(&tasks_path, &args, format)?,
        Commands::Config(args) => commands::config(&config, &paths, &args.command, format)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
