//! Batch processing of export jobs
//!
//! This module provides:
//! - The merge policy that stitches an export block onto source text
//! - Export jobs for the single-file and multi-file call shapes
//! - The batch processor that applies an exporter to every job

pub mod jobs;
pub mod merge;
pub mod processor;

pub use jobs::ExportJobs;
pub use merge::append_export_block;
pub use processor::{process, BatchProcessor, BatchResult};
