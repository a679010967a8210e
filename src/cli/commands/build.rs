//! Build command implementation
//!
//! This module implements the `build` command, which appends the configured
//! exports to every file in the input tree and writes the results.

use super::{report_error, EXIT_OK};
use crate::adapters::tree::{FileTree, LocalFileTree};
use crate::config::{load_config, GlobexConfig, InputTrees};
use crate::core::writer::{BuildSummary, ExportWriter, WriterOptions};
use crate::domain::{ModuleFormat, Result};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the build command
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Dry run mode - compute outputs without writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Override module type (es2015, cjs, amd, umd, system)
    #[arg(short, long)]
    pub module_type: Option<String>,

    /// Override the input directory
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Override the output directory
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl BuildArgs {
    /// Execute the build command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Starting build command");

        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => return Ok(report_error("Failed to load configuration", &e)),
        };

        if let Err(e) = self.apply_overrides(&mut config) {
            return Ok(report_error("Invalid command line override", &e));
        }

        if let Err(e) = config.validate() {
            return Ok(report_error("Configuration validation failed", &e));
        }

        if config.application.dry_run {
            println!("🔍 DRY RUN MODE - No files will be written");
            println!();
        }

        let writer = match Self::create_writer(&config) {
            Ok(w) => w,
            Err(e) => return Ok(report_error("Failed to initialize build", &e)),
        };

        println!("🚀 Starting build...");
        println!();

        let summary = match writer.build().await {
            Ok(s) => s,
            Err(e) => return Ok(report_error("Build failed", &e)),
        };

        print_summary(&summary);
        Ok(EXIT_OK)
    }

    fn apply_overrides(&self, config: &mut GlobexConfig) -> Result<()> {
        if let Some(module_type) = &self.module_type {
            let format = ModuleFormat::from_identifier(Some(module_type));
            tracing::info!(module_type = %format, "Overriding module type from CLI");
            config.build.module_type = format.as_str().to_string();
        }

        if let Some(input) = &self.input {
            tracing::info!(input = %input.display(), "Overriding input directory from CLI");
            config.build.input = InputTrees::Single(input.clone());
        }

        if let Some(output) = &self.output {
            tracing::info!(output = %output.display(), "Overriding output directory from CLI");
            config.build.output = output.clone();
        }

        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }

        Ok(())
    }

    fn create_writer(config: &GlobexConfig) -> Result<ExportWriter> {
        let input: Arc<dyn FileTree> = Arc::new(LocalFileTree::new(config.input_root()?));
        ExportWriter::new(
            vec![input],
            Arc::new(LocalFileTree::new(&config.build.output)),
            config.jobs()?,
            WriterOptions::from_config(config),
        )
    }
}

/// Print a build summary
pub(crate) fn print_summary(summary: &BuildSummary) {
    println!("📊 Build Summary:");
    println!("  Total Files: {}", summary.total_jobs());
    println!("  Processed: {}", summary.processed);
    println!("  Skipped: {}", summary.skipped);
    if summary.rewritten > 0 {
        println!("  Rewritten: {}", summary.rewritten);
    }
    println!("  Written: {}", summary.written);
    println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
    println!();

    if !summary.skipped_files.is_empty() {
        println!("⚠️  Files not found in input tree:");
        for file in &summary.skipped_files {
            println!("  - {file}");
        }
        println!();
    }

    if summary.dry_run {
        println!("✅ Dry run completed, nothing written");
    } else if summary.is_successful() {
        println!("✅ Build completed successfully!");
    } else {
        println!("⚠️  Build completed with skipped files");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;

    fn config() -> GlobexConfig {
        parse_config(
            r#"
[build]
input = "src"
output = "dist"

[files."foo.js"]
default_export = "Foo"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_build_args_defaults() {
        let args = BuildArgs::default();
        assert!(!args.dry_run);
        assert!(args.module_type.is_none());
        assert!(args.input.is_none());
        assert!(args.output.is_none());
    }

    #[test]
    fn test_apply_overrides() {
        let args = BuildArgs {
            dry_run: true,
            module_type: Some("commonjs".to_string()),
            input: Some(PathBuf::from("lib")),
            output: Some(PathBuf::from("out")),
        };
        let mut config = config();
        args.apply_overrides(&mut config).unwrap();

        assert!(config.application.dry_run);
        assert_eq!(config.build.module_type, "cjs");
        assert_eq!(config.input_root().unwrap(), PathBuf::from("lib"));
        assert_eq!(config.build.output, PathBuf::from("out"));
    }

    #[test]
    fn test_unknown_module_type_override_falls_back() {
        let args = BuildArgs {
            module_type: Some("iife".to_string()),
            ..BuildArgs::default()
        };
        let mut config = config();
        config.build.module_type = "cjs".to_string();
        args.apply_overrides(&mut config).unwrap();
        assert_eq!(config.module_format(), ModuleFormat::Es2015);
    }

    #[tokio::test]
    async fn test_execute_missing_config() {
        use crate::cli::commands::EXIT_CONFIGURATION;

        let code = BuildArgs::default()
            .execute("does-not-exist.toml")
            .await
            .unwrap();
        assert_eq!(code, EXIT_CONFIGURATION);
    }
}
