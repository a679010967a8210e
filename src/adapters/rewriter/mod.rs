//! External source rewriters
//!
//! Module formats without a native export template (AMD, UMD, SystemJS) are
//! rendered as ES module source and handed to a [`SourceRewriter`], usually
//! an external source-to-source compiler, that converts the module syntax.

pub mod command;
pub mod factory;

pub use command::CommandRewriter;
pub use factory::create_rewriter;

use crate::domain::{ModuleFormat, Result};
use async_trait::async_trait;

/// Converts ES module source into another module format
#[async_trait]
pub trait SourceRewriter: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Rewrite `source` into `format`
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::GlobexError::Rewrite`] if the rewriter fails.
    async fn rewrite(&self, source: &str, format: ModuleFormat) -> Result<String>;
}
