//! External system integrations for Globex.
//!
//! - [`tree`] - File trees the writer reads from and writes to
//! - [`rewriter`] - External source rewriters for delegated module formats
//!
//! # Design Pattern
//!
//! Adapters isolate the filesystem and child processes behind traits so the
//! core logic can be tested with in-memory implementations.
//!
//! ```rust
//! use globex::adapters::tree::{FileTree, MemoryFileTree};
//! use globex::domain::FileName;
//!
//! # async fn example() -> globex::domain::Result<()> {
//! let tree = MemoryFileTree::new("scratch");
//! let foo = FileName::new("foo.js").unwrap();
//! tree.write(&foo, "var a;").await?;
//! assert_eq!(tree.read(&foo).await?, Some("var a;".to_string()));
//! # Ok(())
//! # }
//! ```

pub mod rewriter;
pub mod tree;
