//! Command-line interface for taskboard.

pub mod args;
pub mod commands;
