// Globex - Module export writer for script files
// Copyright (c) 2025 Globex Contributors
// Licensed under the MIT License

//! # Globex - module exports for plain script files
//!
//! Globex appends export statements to the end of JavaScript source files
//! that declare their symbols as plain globals, so the same files can be
//! consumed as ES2015 or CommonJS modules. AMD, UMD and SystemJS outputs are
//! produced by handing the ES2015 result to an external rewriter.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Export rendering, batch processing and the tree writer
//! - [`adapters`] - File trees and external rewriters
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust
//! use globex::core::batch::{process, ExportJobs};
//! use globex::domain::{ExportSpec, FileName, ModuleFormat};
//! use std::collections::BTreeMap;
//!
//! # fn main() -> globex::domain::Result<()> {
//! let foo = FileName::new("foo.js").unwrap();
//! let jobs = ExportJobs::single(
//!     foo.clone(),
//!     ExportSpec::new(Some("Foo".to_string()), vec!["bar".to_string()])?,
//! );
//! let inputs = BTreeMap::from([(foo.clone(), "var Foo = 1, bar = 2".to_string())]);
//!
//! let outputs = process(&inputs, &jobs, ModuleFormat::CommonJs)?;
//! assert_eq!(
//!     outputs[&foo],
//!     "var Foo = 1, bar = 2;\n\
//!      exports.bar = bar;\n\
//!      Object.defineProperty(exports, '__esModule', { value: true });\n\
//!      exports['default'] = Foo;"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every fallible operation returns [`domain::Result`], whose error type is
//! [`domain::GlobexError`]. Configuration and shape errors are raised before
//! any file is read.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
