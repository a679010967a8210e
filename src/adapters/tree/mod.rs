//! File tree abstraction
//!
//! This module defines the trait the writer uses to read source files and
//! persist outputs, so the export logic never touches the filesystem itself.

pub mod local;
pub mod memory;

pub use local::LocalFileTree;
pub use memory::MemoryFileTree;

use crate::domain::{FileName, Result};
use async_trait::async_trait;

/// A tree of text files addressed by relative name
#[async_trait]
pub trait FileTree: Send + Sync {
    /// Human-readable description for logs (e.g. the root path)
    fn describe(&self) -> String;

    /// Read a file
    ///
    /// # Returns
    ///
    /// Returns `Ok(None)` if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read as UTF-8 text.
    async fn read(&self, file_name: &FileName) -> Result<Option<String>>;

    /// Write a file, creating intermediate directories as needed
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    async fn write(&self, file_name: &FileName, contents: &str) -> Result<()>;
}
