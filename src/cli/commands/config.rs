//! Config command implementation.

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::TaskboardError;
use crate::output::to_json;

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the config file cannot be serialized or written.
pub fn config(
    config: &Config,
    paths: &Paths,
    cmd: &ConfigCommands,
    format: OutputFormat,
) -> Result<String, TaskboardError> {
    match cmd {
        ConfigCommands::Show => match format {
            OutputFormat::Json => to_json(config),
            OutputFormat::Pretty => serde_yaml::to_string(config)
                .map(|yaml| yaml.trim_end().to_string())
                .map_err(|e| TaskboardError::Config(format!("Failed to serialize config: {e}"))),
        },
        ConfigCommands::Init { force } => {
            if paths.config_file.exists() && !force {
                return Err(TaskboardError::Config(format!(
                    "Config file already exists: {} (use --force to overwrite)",
                    paths.config_file.display()
                )));
            }
            paths.ensure_dirs()?;
            Config::default().save_to_path(&paths.config_file)?;
            Ok(format!("Wrote {}", paths.config_file.display()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_init_and_refuse_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join(".taskboard"));
        let config = Config::default();

        let message = super::config(&config, &paths, &ConfigCommands::Init { force: false }, OutputFormat::Pretty)
            .unwrap();
        assert!(message.starts_with("Wrote "));
        assert!(paths.config_file.exists());

        let err = super::config(&config, &paths, &ConfigCommands::Init { force: false }, OutputFormat::Pretty)
            .unwrap_err();
        assert!(matches!(err, TaskboardError::Config(_)));

        assert!(super::config(&config, &paths, &ConfigCommands::Init { force: true }, OutputFormat::Pretty).is_ok());
    }

    #[test]
    fn test_config_show_json() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());
        let output = super::config(&Config::default(), &paths, &ConfigCommands::Show, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["stats"]["window_days"], 7);
    }
}
