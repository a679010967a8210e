// Globex - Module export writer for script files
// Copyright (c) 2025 Globex Contributors
// Licensed under the MIT License

use clap::Parser;
use globex::cli::commands::EXIT_FATAL;
use globex::cli::{Cli, Commands};
use globex::config::LoggingConfig;
use globex::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Console-only logging; the config file is not loaded yet
    let log_level = cli.log_level.as_deref().unwrap_or("info");
    let logging_config = LoggingConfig {
        local_enabled: false,
        ..LoggingConfig::default()
    };
    let _guard = match init_logging(log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(EXIT_FATAL);
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Globex starting");

    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            EXIT_FATAL
        }
    };

    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Build(args) => args.execute(&cli.config).await,
        Commands::Write(args) => args.execute(&cli.config).await,
        Commands::Render(args) => args.execute().await,
        Commands::ValidateConfig(args) => args.execute(&cli.config).await,
        Commands::Init(args) => args.execute().await,
    }
}
