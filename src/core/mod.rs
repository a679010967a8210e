//! Core logic for Globex.
//!
//! # Modules
//!
//! - [`exporter`] - Export statement rendering per module format
//! - [`batch`] - Merge policy, export jobs and the batch processor
//! - [`writer`] - Reads an input tree, runs the batch and writes the results
//!
//! # Build Workflow
//!
//! 1. **Read**: Load every configured file from the input tree
//! 2. **Process**: Append the rendered export block to each file
//! 3. **Rewrite** (AMD, UMD, SystemJS): Convert the ES module output
//! 4. **Write**: Persist the results to the output tree
//!
//! # Example
//!
//! ```rust,no_run
//! use globex::adapters::tree::{FileTree, LocalFileTree};
//! use globex::config::load_config;
//! use globex::core::writer::{ExportWriter, WriterOptions};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("globex.toml")?;
//!
//! let input: Arc<dyn FileTree> = Arc::new(LocalFileTree::new(config.input_root()?));
//! let writer = ExportWriter::new(
//!     vec![input],
//!     Arc::new(LocalFileTree::new(&config.build.output)),
//!     config.jobs()?,
//!     WriterOptions::from_config(&config),
//! )?;
//!
//! let summary = writer.build().await?;
//! println!("Processed: {}", summary.processed);
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod exporter;
pub mod writer;
