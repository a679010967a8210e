//! Logging and observability
//!
//! Structured logging through `tracing`, with an optional JSON file sink and
//! a few macros that keep per-file log events uniform.
//!
//! # Example
//!
//! ```no_run
//! use globex::logging::init_logging;
//! use globex::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Build started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log that a file received its export block
///
/// # Example
///
/// ```no_run
/// use globex::log_file_processed;
/// use globex::domain::{FileName, ModuleFormat};
///
/// let file_name = FileName::new("foo.js").unwrap();
/// log_file_processed!(&file_name, ModuleFormat::Es2015, 128);
/// ```
#[macro_export]
macro_rules! log_file_processed {
    ($file_name:expr, $format:expr, $bytes:expr) => {
        tracing::debug!(
            file = %$file_name,
            format = %$format,
            bytes = $bytes,
            "Appended export block"
        );
    };
}

/// Log that a configured file was skipped
///
/// # Example
///
/// ```no_run
/// use globex::log_file_skipped;
/// use globex::domain::FileName;
///
/// let file_name = FileName::new("missing.js").unwrap();
/// log_file_skipped!(&file_name, "not present in input files");
/// ```
#[macro_export]
macro_rules! log_file_skipped {
    ($file_name:expr, $reason:expr) => {
        tracing::warn!(
            file = %$file_name,
            reason = $reason,
            "Skipping file"
        );
    };
}

/// Log the completion of a build
///
/// # Example
///
/// ```no_run
/// use globex::log_build_complete;
/// use std::time::Duration;
///
/// log_build_complete!(3, 1, Duration::from_millis(12));
/// ```
#[macro_export]
macro_rules! log_build_complete {
    ($processed:expr, $skipped:expr, $duration:expr) => {
        tracing::info!(
            processed = $processed,
            skipped = $skipped,
            duration_ms = $duration.as_millis(),
            "Build completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use globex::log_error_with_context;
/// use globex::domain::GlobexError;
///
/// let error = GlobexError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
