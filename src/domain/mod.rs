//! Domain models and types for Globex.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Export specifications** ([`ExportSpec`]) validated on construction
//! - **Module formats** ([`ModuleFormat`]) with native and delegated variants
//! - **File names** ([`FileName`]) that cannot escape their tree
//! - **Error types** ([`GlobexError`], [`RewriteError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, GlobexError>`]:
//!
//! ```rust
//! use globex::domain::{ExportSpec, Result};
//!
//! fn example() -> Result<()> {
//!     let spec = ExportSpec::default_only("Foo")?;
//!     assert!(spec.has_default_export());
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod export_spec;
pub mod format;
pub mod ids;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{GlobexError, RewriteError};
pub use export_spec::ExportSpec;
pub use format::ModuleFormat;
pub use ids::FileName;
pub use result::Result;
