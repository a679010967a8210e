//! Export writer
//!
//! Host side of the batch: reads the job files from the input tree, appends
//! the export blocks, hands the results to a rewriter when the module format
//! needs one, and writes everything to the output tree.

use crate::adapters::rewriter::{create_rewriter, SourceRewriter};
use crate::adapters::tree::FileTree;
use crate::config::GlobexConfig;
use crate::core::batch::{BatchProcessor, ExportJobs};
use crate::domain::{FileName, GlobexError, ModuleFormat, Result};
use crate::log_build_complete;
use futures::stream::{self, StreamExt, TryStreamExt};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Default number of files handled at once
pub const DEFAULT_MAX_CONCURRENCY: usize = 8;

/// Options for an [`ExportWriter`]
#[derive(Clone)]
pub struct WriterOptions {
    /// Target module format
    pub format: ModuleFormat,

    /// Maximum number of files read, rewritten or written concurrently
    pub max_concurrency: usize,

    /// Compute outputs without writing them
    pub dry_run: bool,

    /// Rewriter for delegated formats
    pub rewriter: Option<Arc<dyn SourceRewriter>>,
}

impl WriterOptions {
    /// Options for a format, with defaults for everything else
    pub fn new(format: ModuleFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    /// Options from a loaded configuration
    pub fn from_config(config: &GlobexConfig) -> Self {
        Self {
            format: config.module_format(),
            max_concurrency: config.build.max_concurrency,
            dry_run: config.application.dry_run,
            rewriter: create_rewriter(config.rewriter.as_ref()),
        }
    }

    /// Set dry run mode
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Set the rewriter
    pub fn with_rewriter(mut self, rewriter: Arc<dyn SourceRewriter>) -> Self {
        self.rewriter = Some(rewriter);
        self
    }
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            format: ModuleFormat::default(),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            dry_run: false,
            rewriter: None,
        }
    }
}

impl std::fmt::Debug for WriterOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WriterOptions")
            .field("format", &self.format)
            .field("max_concurrency", &self.max_concurrency)
            .field("dry_run", &self.dry_run)
            .field("rewriter", &self.rewriter.as_ref().map(|r| r.name().to_string()))
            .finish()
    }
}

/// Summary of a build
#[derive(Debug, Clone, Default)]
pub struct BuildSummary {
    /// Files that received an export block
    pub processed: usize,

    /// Jobs whose file was missing from the input tree
    pub skipped: usize,

    /// Files passed through the rewriter
    pub rewritten: usize,

    /// Files written to the output tree
    pub written: usize,

    /// Whether this was a dry run
    pub dry_run: bool,

    /// Duration of the build
    pub duration: Duration,

    /// Processed files, in name order
    pub files: Vec<FileName>,

    /// Skipped files, in name order
    pub skipped_files: Vec<FileName>,
}

impl BuildSummary {
    /// Every configured file was found and processed
    pub fn is_successful(&self) -> bool {
        self.skipped == 0
    }

    /// Number of configured jobs
    pub fn total_jobs(&self) -> usize {
        self.processed + self.skipped
    }
}

/// Writes export-augmented files from one tree to another
pub struct ExportWriter {
    input: Arc<dyn FileTree>,
    output: Arc<dyn FileTree>,
    jobs: ExportJobs,
    processor: BatchProcessor,
    options: WriterOptions,
}

impl ExportWriter {
    /// Create a writer
    ///
    /// # Errors
    ///
    /// - [`GlobexError::Shape`] unless exactly one input tree is given
    /// - [`GlobexError::Configuration`] for a zero concurrency limit, or a
    ///   delegated format without a rewriter
    pub fn new(
        mut inputs: Vec<Arc<dyn FileTree>>,
        output: Arc<dyn FileTree>,
        jobs: ExportJobs,
        options: WriterOptions,
    ) -> Result<Self> {
        let input = match (inputs.pop(), inputs.is_empty()) {
            (Some(input), true) => input,
            _ => {
                return Err(GlobexError::Shape(
                    "Does not support more than one input tree".to_string(),
                ))
            }
        };

        if options.max_concurrency == 0 {
            return Err(GlobexError::Configuration(
                "max_concurrency must be > 0".to_string(),
            ));
        }

        if options.format.requires_rewrite() && options.rewriter.is_none() {
            return Err(GlobexError::Configuration(format!(
                "Module type '{}' requires a rewriter",
                options.format
            )));
        }

        Ok(Self {
            input,
            output,
            jobs,
            processor: BatchProcessor::new(options.format),
            options,
        })
    }

    /// Jobs this writer runs
    pub fn jobs(&self) -> &ExportJobs {
        &self.jobs
    }

    /// Run the build
    ///
    /// # Errors
    ///
    /// Fails on the first read, contract, rewrite or write error. Files
    /// already written stay in place.
    pub async fn build(&self) -> Result<BuildSummary> {
        let start = Instant::now();

        tracing::info!(
            input = %self.input.describe(),
            output = %self.output.describe(),
            format = %self.options.format,
            jobs = self.jobs.len(),
            dry_run = self.options.dry_run,
            "Starting build"
        );

        let inputs = self.read_inputs().await?;
        let batch = self.processor.process(&inputs, &self.jobs)?;

        let mut outputs = batch.outputs;
        let mut rewritten = 0;
        if self.options.format.requires_rewrite() {
            if let Some(rewriter) = &self.options.rewriter {
                outputs = self.rewrite_outputs(rewriter, outputs).await?;
                rewritten = outputs.len();
            }
        }

        let written = if self.options.dry_run {
            tracing::info!(files = outputs.len(), "Dry run, skipping writes");
            0
        } else {
            self.write_outputs(&outputs).await?
        };

        let summary = BuildSummary {
            processed: outputs.len(),
            skipped: batch.skipped.len(),
            rewritten,
            written,
            dry_run: self.options.dry_run,
            duration: start.elapsed(),
            files: outputs.into_keys().collect(),
            skipped_files: batch.skipped,
        };

        log_build_complete!(summary.processed, summary.skipped, summary.duration);
        Ok(summary)
    }

    async fn read_inputs(&self) -> Result<BTreeMap<FileName, String>> {
        let input = &self.input;
        let contents: Vec<(FileName, Option<String>)> = stream::iter(self.jobs.file_names())
            .map(|file_name| async move {
                let contents = input.read(file_name).await?;
                Ok::<_, GlobexError>((file_name.clone(), contents))
            })
            .buffer_unordered(self.options.max_concurrency)
            .try_collect()
            .await?;

        Ok(contents
            .into_iter()
            .filter_map(|(file_name, contents)| contents.map(|c| (file_name, c)))
            .collect())
    }

    async fn rewrite_outputs(
        &self,
        rewriter: &Arc<dyn SourceRewriter>,
        outputs: BTreeMap<FileName, String>,
    ) -> Result<BTreeMap<FileName, String>> {
        let format = self.options.format;

        stream::iter(outputs)
            .map(|(file_name, source)| async move {
                match rewriter.rewrite(&source, format).await {
                    Ok(rewritten) => Ok((file_name, rewritten)),
                    Err(e) => {
                        tracing::error!(
                            file = %file_name,
                            rewriter = rewriter.name(),
                            error = %e,
                            "Rewrite failed"
                        );
                        Err(e)
                    }
                }
            })
            .buffer_unordered(self.options.max_concurrency)
            .try_collect()
            .await
    }

    async fn write_outputs(&self, outputs: &BTreeMap<FileName, String>) -> Result<usize> {
        let output = &self.output;
        stream::iter(outputs)
            .map(|(file_name, contents)| async move {
                output.write(file_name, contents).await?;
                tracing::debug!(file = %file_name, "Wrote output file");
                Ok::<_, GlobexError>(())
            })
            .buffer_unordered(self.options.max_concurrency)
            .try_fold(0, |count, ()| async move { Ok(count + 1) })
            .await
    }
}
