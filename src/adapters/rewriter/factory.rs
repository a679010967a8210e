//! Rewriter factory

use super::{CommandRewriter, SourceRewriter};
use crate::config::schema::RewriterConfig;
use std::sync::Arc;

/// Create a source rewriter from the optional `[rewriter]` section
///
/// Returns `None` when no rewriter is configured.
pub fn create_rewriter(config: Option<&RewriterConfig>) -> Option<Arc<dyn SourceRewriter>> {
    config.map(|config| {
        tracing::info!(command = %config.command, "Creating command rewriter");
        Arc::new(CommandRewriter::new(config)) as Arc<dyn SourceRewriter>
    })
}
