//! Domain error types
//!
//! This module defines the error hierarchy for Globex. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Globex error type
///
/// This is the primary error type used throughout the application.
#[derive(Debug, Error)]
pub enum GlobexError {
    /// Configuration errors, raised at setup time before any file I/O
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An exporter variant broke the rendering contract
    #[error("Contract violation: {0}")]
    Contract(String),

    /// Wrong number or kind of input trees
    #[error("Shape error: {0}")]
    Shape(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// External source rewriter errors
    #[error("Rewrite error: {0}")]
    Rewrite(#[from] RewriteError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl GlobexError {
    /// Returns true for errors that indicate a configuration or programming
    /// mistake rather than a problem with the files being processed
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            GlobexError::Configuration(_)
                | GlobexError::Contract(_)
                | GlobexError::Shape(_)
                | GlobexError::Validation(_)
        )
    }
}

/// Errors raised by an external source rewriter
///
/// These errors don't expose process or I/O types of the underlying runner.
#[derive(Debug, Error)]
pub enum RewriteError {
    /// The rewriter process could not be started
    #[error("Failed to start rewriter: {0}")]
    SpawnFailed(String),

    /// The rewriter exited unsuccessfully
    #[error("Rewriter exited with status {status}: {stderr}")]
    Failed { status: i32, stderr: String },

    /// The rewriter did not finish in time
    #[error("Rewriter timed out after {0} seconds")]
    Timeout(u64),

    /// The rewriter produced output that is not valid text
    #[error("Invalid rewriter output: {0}")]
    InvalidOutput(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for GlobexError {
    fn from(err: std::io::Error) -> Self {
        GlobexError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for GlobexError {
    fn from(err: serde_json::Error) -> Self {
        GlobexError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for GlobexError {
    fn from(err: toml::de::Error) -> Self {
        GlobexError::Configuration(format!("TOML parse error: {err}"))
    }
}
