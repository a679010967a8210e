//! Configuration management for Globex.
//!
//! # Overview
//!
//! Globex uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `GLOBEX_*` environment overrides
//! - Default values for optional settings
//! - Validation of every export spec before any file is touched
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use globex::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("globex.toml")?;
//!
//! println!("Module type: {}", config.build.module_type);
//! println!("Files: {}", config.jobs()?.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Application settings (log level, dry run)
//! - [`BuildConfig`] - Input and output trees, module type, concurrency
//! - [`FileExportOptions`] - Default and named exports for one file
//! - [`RewriterConfig`] - External rewriter for AMD, UMD and SystemJS
//! - [`LoggingConfig`] - Logging configuration
//!
//! # Example Configuration
//!
//! ```toml
//! [build]
//! input = "src"
//! output = "dist"
//! module_type = "cjs"
//!
//! [files."foo.js"]
//! default_export = "Foo"
//! exports = ["bar", "baz"]
//!
//! [files."lib/util.js"]
//! exports = ["helper"]
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_rewriter_config, parse_config};
pub use schema::{
    ApplicationConfig, BuildConfig, FileExportOptions, GlobexConfig, InputTrees, LoggingConfig,
    RewriterConfig,
};
