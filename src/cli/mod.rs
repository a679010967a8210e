//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Globex using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Globex - append module exports to script files
#[derive(Parser, Debug)]
#[command(name = "globex")]
#[command(version, about, long_about = None)]
#[command(author = "Globex Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "globex.toml", env = "GLOBEX_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "GLOBEX_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Append the configured exports to every file and write the results
    Build(commands::build::BuildArgs),

    /// Append exports to a single file, without a configuration file
    Write(commands::write::WriteArgs),

    /// Print the export block for a set of exports
    Render(commands::render::RenderArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
