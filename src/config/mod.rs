//! Configuration management for taskboard.
//!
//! This module handles loading and saving configuration from `~/.taskboard/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{Config, GeneralConfig, StatsConfig};
