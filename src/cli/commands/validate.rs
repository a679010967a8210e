//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Globex configuration file.

use super::{report_error, EXIT_OK};
use crate::config::{load_config, GlobexConfig};
use crate::domain::Result;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // Loading validates; a failure here covers both parse and validation errors.
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => return Ok(report_error("Configuration is invalid", &e)),
        };

        match summarize(&config) {
            Ok(lines) => {
                println!("✅ Configuration is valid");
                println!();
                println!("Configuration Summary:");
                for line in lines {
                    println!("  {line}");
                }
                println!();
                Ok(EXIT_OK)
            }
            Err(e) => Ok(report_error("Configuration is invalid", &e)),
        }
    }
}

fn summarize(config: &GlobexConfig) -> Result<Vec<String>> {
    let jobs = config.jobs()?;
    let mut lines = vec![
        format!("Log Level: {}", config.application.log_level),
        format!("Input: {}", config.input_root()?.display()),
        format!("Output: {}", config.build.output.display()),
        format!("Module Type: {}", config.module_format()),
        format!("Max Concurrency: {}", config.build.max_concurrency),
        format!("Dry Run: {}", config.application.dry_run),
    ];

    if let Some(rewriter) = &config.rewriter {
        lines.push(format!("Rewriter: {} {}", rewriter.command, rewriter.args.join(" ")));
    }

    lines.push(format!("Files: {}", jobs.len()));
    for (file_name, spec) in &jobs {
        let mut exports: Vec<String> = spec.named_exports().to_vec();
        if let Some(default_export) = spec.default_export() {
            exports.push(format!("default {default_export}"));
        }
        lines.push(format!("  {file_name}: {}", exports.join(", ")));
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::EXIT_CONFIGURATION;
    use crate::config::parse_config;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const VALID: &str = r#"
[build]
input = "src"
output = "dist"
module_type = "cjs"

[files."foo.js"]
default_export = "Foo"
exports = ["bar"]
"#;

    #[test]
    fn test_summarize() {
        let config = parse_config(VALID).unwrap();
        let lines = summarize(&config).unwrap();

        assert!(lines.contains(&"Module Type: cjs".to_string()));
        assert!(lines.contains(&"Files: 1".to_string()));
        assert!(lines.contains(&"  foo.js: bar, default Foo".to_string()));
    }

    #[tokio::test]
    async fn test_execute_valid() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(VALID.as_bytes()).unwrap();
        file.flush().unwrap();

        let path = file.path().to_string_lossy().to_string();
        assert_eq!(ValidateArgs {}.execute(&path).await.unwrap(), EXIT_OK);
    }

    #[tokio::test]
    async fn test_execute_missing_file() {
        let code = ValidateArgs {}.execute("missing.toml").await.unwrap();
        assert_eq!(code, EXIT_CONFIGURATION);
    }
}
