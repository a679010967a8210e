//! Write command implementation
//!
//! Single-file form of `build` that needs no configuration file: one file,
//! its exports and the two directories all come from the command line.

use super::build::print_summary;
use super::{parse_module_type, report_error, EXIT_OK};
use crate::adapters::rewriter::SourceRewriter;
use crate::adapters::tree::{FileTree, LocalFileTree};
use crate::config::load_rewriter_config;
use crate::core::batch::ExportJobs;
use crate::core::writer::{ExportWriter, WriterOptions};
use crate::domain::{ExportSpec, FileName, GlobexError, Result};
use clap::Args;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Arguments for the write command
#[derive(Args, Debug)]
pub struct WriteArgs {
    /// File to process, relative to the input directory
    pub file: String,

    /// Input directory
    #[arg(long)]
    pub input: PathBuf,

    /// Output directory
    #[arg(long)]
    pub output: PathBuf,

    /// Name of the default export
    #[arg(long)]
    pub default_export: Option<String>,

    /// Named export (repeatable)
    #[arg(short = 'e', long = "export", value_name = "NAME")]
    pub exports: Vec<String>,

    /// Module type (es2015, cjs, amd, umd, system)
    #[arg(short, long)]
    pub module_type: Option<String>,

    /// Dry run mode - compute the output without writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl WriteArgs {
    /// Execute the write command
    ///
    /// The configuration file is only consulted for a `[rewriter]` section,
    /// and only when the module type needs one.
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(file = %self.file, "Starting write command");

        let format = parse_module_type(self.module_type.as_deref());

        let jobs = match self.jobs() {
            Ok(j) => j,
            Err(e) => return Ok(report_error("Invalid export options", &e)),
        };

        let mut options = WriterOptions::new(format).with_dry_run(self.dry_run);
        if format.requires_rewrite() {
            match rewriter_from_config(config_path) {
                Ok(rewriter) => options = options.with_rewriter(rewriter),
                Err(e) => return Ok(report_error("No rewriter available", &e)),
            }
        }

        let input: Arc<dyn FileTree> = Arc::new(LocalFileTree::new(&self.input));
        let writer = match ExportWriter::new(
            vec![input],
            Arc::new(LocalFileTree::new(&self.output)),
            jobs,
            options,
        ) {
            Ok(w) => w,
            Err(e) => return Ok(report_error("Failed to initialize write", &e)),
        };

        match writer.build().await {
            Ok(summary) => {
                print_summary(&summary);
                Ok(EXIT_OK)
            }
            Err(e) => Ok(report_error("Write failed", &e)),
        }
    }

    fn jobs(&self) -> Result<ExportJobs> {
        let file_name = FileName::new(&self.file).map_err(GlobexError::Configuration)?;
        let spec = ExportSpec::new(self.default_export.clone(), self.exports.clone())?;
        Ok(ExportJobs::single(file_name, spec))
    }
}

fn rewriter_from_config(config_path: &str) -> Result<Arc<dyn SourceRewriter>> {
    if !Path::new(config_path).exists() {
        return Err(GlobexError::Configuration(format!(
            "Delegated module types need a [rewriter] section in {config_path}"
        )));
    }

    let rewriter = load_rewriter_config(config_path)?;
    crate::adapters::rewriter::create_rewriter(rewriter.as_ref()).ok_or_else(|| {
        GlobexError::Configuration(format!("No [rewriter] section in {config_path}"))
    })
}
