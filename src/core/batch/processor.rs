//! Batch processing of export jobs
//!
//! Pure transform: input texts in, merged texts out. Reading and writing
//! files is left to the caller.

use super::jobs::ExportJobs;
use crate::core::exporter::{exporter_for, Exporter};
use crate::domain::{FileName, ModuleFormat, Result};
use crate::{log_file_processed, log_file_skipped};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Result of processing a batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    /// Merged text per processed file
    pub outputs: BTreeMap<FileName, String>,
    /// Jobs whose file was not among the inputs
    pub skipped: Vec<FileName>,
}

impl BatchResult {
    /// Create a new empty batch result
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of files that produced output
    pub fn processed(&self) -> usize {
        self.outputs.len()
    }
}

/// Batch processor for export jobs
pub struct BatchProcessor {
    exporter: Arc<dyn Exporter>,
}

impl BatchProcessor {
    /// Create a processor for a module format
    pub fn new(format: ModuleFormat) -> Self {
        Self::with_exporter(exporter_for(format))
    }

    /// Create a processor around a specific exporter
    pub fn with_exporter(exporter: Arc<dyn Exporter>) -> Self {
        Self { exporter }
    }

    /// Exporter used to render the export blocks
    pub fn exporter(&self) -> &Arc<dyn Exporter> {
        &self.exporter
    }

    /// Append the export block of every job to its input text
    ///
    /// Jobs whose file is missing from `input_files` are recorded in
    /// [`BatchResult::skipped`] and produce no output.
    ///
    /// # Errors
    ///
    /// A contract violation from the exporter aborts the whole batch.
    pub fn process(
        &self,
        input_files: &BTreeMap<FileName, String>,
        jobs: &ExportJobs,
    ) -> Result<BatchResult> {
        let mut result = BatchResult::new();

        for (file_name, spec) in jobs {
            let Some(source_code) = input_files.get(file_name) else {
                log_file_skipped!(file_name, "not present in input files");
                result.skipped.push(file_name.clone());
                continue;
            };

            let merged = self.exporter.process_source_code(source_code, spec)?;
            log_file_processed!(file_name, self.exporter.format(), merged.len());
            result.outputs.insert(file_name.clone(), merged);
        }

        Ok(result)
    }
}

/// Process `jobs` against `input_files` in the given format
///
/// Convenience wrapper around [`BatchProcessor`] that returns only the
/// output mapping.
///
/// # Examples
///
/// ```
/// use globex::core::batch::{process, ExportJobs};
/// use globex::domain::{ExportSpec, FileName, ModuleFormat};
/// use std::collections::BTreeMap;
///
/// # fn example() -> globex::domain::Result<()> {
/// let foo = FileName::new("foo.js").unwrap();
/// let jobs = ExportJobs::single(foo.clone(), ExportSpec::default_only("Foo")?);
/// let inputs = BTreeMap::from([(foo.clone(), "function Foo() {}".to_string())]);
///
/// let outputs = process(&inputs, &jobs, ModuleFormat::Es2015)?;
/// assert_eq!(outputs[&foo], "function Foo() {};\nexport default Foo;");
/// # Ok(())
/// # }
/// ```
pub fn process(
    input_files: &BTreeMap<FileName, String>,
    jobs: &ExportJobs,
    format: ModuleFormat,
) -> Result<BTreeMap<FileName, String>> {
    Ok(BatchProcessor::new(format).process(input_files, jobs)?.outputs)
}
