//! CLI command implementations
//!
//! Commands return a process exit code:
//!
//! - `0` - success
//! - `2` - configuration error (including bad input shape)
//! - `3` - rewriter failure
//! - `5` - fatal error

pub mod build;
pub mod init;
pub mod render;
pub mod validate;
pub mod write;

use crate::domain::{GlobexError, ModuleFormat};

/// Exit code for a successful run
pub const EXIT_OK: i32 = 0;

/// Exit code for configuration and shape errors
pub const EXIT_CONFIGURATION: i32 = 2;

/// Exit code for rewriter failures
pub const EXIT_REWRITE: i32 = 3;

/// Exit code for everything else
pub const EXIT_FATAL: i32 = 5;

/// Map an error to the exit code reported by the CLI
pub fn exit_code_for(error: &GlobexError) -> i32 {
    match error {
        GlobexError::Configuration(_) | GlobexError::Shape(_) | GlobexError::Validation(_) => {
            EXIT_CONFIGURATION
        }
        GlobexError::Rewrite(_) => EXIT_REWRITE,
        _ => EXIT_FATAL,
    }
}

/// Print an error and return its exit code
pub(crate) fn report_error(context: &str, error: &GlobexError) -> i32 {
    crate::log_error_with_context!(error, context);
    eprintln!("❌ {context}");
    eprintln!("   Error: {error}");
    exit_code_for(error)
}

/// Resolve a `--module-type` flag
///
/// Absent or unrecognized identifiers select ES2015.
pub(crate) fn parse_module_type(module_type: Option<&str>) -> ModuleFormat {
    ModuleFormat::from_identifier(module_type)
}
