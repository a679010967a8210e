//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use super::{EXIT_CONFIGURATION, EXIT_FATAL, EXIT_OK};
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "globex.toml")]
    pub path: String,

    /// Include every option with comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(path = %self.path, "Initializing configuration file");

        println!("📝 Initializing Globex configuration");
        println!();

        if Path::new(&self.path).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.path);
            println!("   Use --force to overwrite");
            return Ok(EXIT_CONFIGURATION);
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.path, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.path);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your input and output directories", self.path);
                println!("  2. Add a [files.\"<name>\"] section per file to export from");
                println!("  3. Validate configuration: globex validate-config");
                println!("  4. Run the build: globex build");
                println!();
                Ok(EXIT_OK)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(EXIT_FATAL)
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Globex Configuration File

[application]
log_level = "info"
dry_run = false

[build]
input = "src"
output = "dist"
module_type = "es2015"

[files."index.js"]
default_export = "main"
exports = []
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# Globex Configuration File
#
# Appends export statements to plain script files so they can be consumed
# as modules.

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# Dry run mode (compute outputs but don't write them)
dry_run = false

# ============================================================================
# Build Settings
# ============================================================================
[build]
# Directory holding the source files (exactly one)
input = "src"

# Directory receiving the processed files
output = "dist"

# Module type: es2015 | cjs | amd | umd | system
# amd, umd and system require a [rewriter] section
module_type = "es2015"

# Maximum number of files read, rewritten or written at once
max_concurrency = 8

# ============================================================================
# Files
# ============================================================================
# One section per file, keyed by its path relative to the input directory.
# Each file needs a default export, named exports, or both.
[files."index.js"]
default_export = "main"
exports = ["helper", "VERSION"]

[files."lib/util.js"]
exports = ["format", "parse"]

# ============================================================================
# Rewriter (only for amd, umd and system)
# ============================================================================
# The command reads ES module source on stdin and prints the converted
# source on stdout. {format} in args is replaced with the module type, and
# GLOBEX_MODULE_FORMAT / GLOBEX_REWRITE_OPTIONS are set in its environment.
#
# [rewriter]
# command = "npx"
# args = ["babel", "--plugins", "@babel/plugin-transform-modules-{format}"]
# timeout_secs = 60
#
# [rewriter.options]
# loose = true

# ============================================================================
# Logging Configuration
# ============================================================================
[logging]
# Enable local file logging (JSON lines)
local_enabled = false

# Local log directory
local_path = "./logs"

# Log rotation (daily, hourly, never)
local_rotation = "daily"
"#
        .to_string()
    }
}
