//! Configuration schema types
//!
//! This module defines the configuration structure for Globex.

use crate::core::batch::ExportJobs;
use crate::domain::{ExportSpec, FileName, GlobexError, ModuleFormat, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Main Globex configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobexConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Build settings (trees, module type, concurrency)
    pub build: BuildConfig,

    /// Export options per file (multi-file shape)
    #[serde(default)]
    pub files: BTreeMap<String, FileExportOptions>,

    /// External rewriter for delegated module formats
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rewriter: Option<RewriterConfig>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl GlobexConfig {
    /// Validates the configuration
    ///
    /// Every export spec is built here, so an empty spec is reported before
    /// any file is read.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<()> {
        self.application.validate()?;
        self.build.validate()?;
        self.logging.validate()?;
        self.input_root()?;

        let format = self.module_format();
        if format.requires_rewrite() {
            match &self.rewriter {
                Some(rewriter) => rewriter.validate()?,
                None => {
                    return Err(GlobexError::Configuration(format!(
                        "module_type '{format}' needs a [rewriter] section"
                    )))
                }
            }
        }

        self.jobs()?;
        Ok(())
    }

    /// Module format for this build
    ///
    /// Unrecognized module types fall back to ES2015.
    pub fn module_format(&self) -> ModuleFormat {
        ModuleFormat::from_identifier(Some(&self.build.module_type))
    }

    /// The single input root
    ///
    /// # Errors
    ///
    /// Returns a shape error if more than one input tree is configured
    pub fn input_root(&self) -> Result<PathBuf> {
        self.build.input.single()
    }

    /// Builds the export jobs from either the single-file or the multi-file shape
    ///
    /// # Errors
    ///
    /// Returns a configuration error when both shapes are used, when no file
    /// is configured, or when a file's export options are empty.
    pub fn jobs(&self) -> Result<ExportJobs> {
        match (&self.build.file, self.files.is_empty()) {
            (Some(_), false) => Err(GlobexError::Configuration(
                "Use either build.file or [files], not both".to_string(),
            )),
            (Some(file), true) => {
                let options = self.build.options.clone().unwrap_or_default();
                Ok(ExportJobs::single(
                    parse_file_name(file)?,
                    options.to_spec(file)?,
                ))
            }
            (None, true) => Err(GlobexError::Configuration(
                "No files configured. Add a [files.\"<name>\"] section or build.file".to_string(),
            )),
            (None, false) => ExportJobs::batch(
                self.files
                    .iter()
                    .map(|(file, options)| Ok((parse_file_name(file)?, options.to_spec(file)?)))
                    .collect::<Result<Vec<_>>>()?,
            ),
        }
    }
}

fn parse_file_name(file: &str) -> Result<FileName> {
    FileName::new(file).map_err(GlobexError::Configuration)
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (compute outputs but don't write them)
    #[serde(default)]
    pub dry_run: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<()> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(GlobexError::Configuration(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            )));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

/// Input tree(s) as written in the configuration
///
/// Accepts a single path or a list; only one tree is supported, so a list
/// must hold exactly one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputTrees {
    /// A single input directory
    Single(PathBuf),
    /// A list of input directories
    Many(Vec<PathBuf>),
}

impl InputTrees {
    /// The one input root
    ///
    /// # Errors
    ///
    /// Returns [`GlobexError::Shape`] unless exactly one tree is given
    pub fn single(&self) -> Result<PathBuf> {
        match self {
            InputTrees::Single(path) => Ok(path.clone()),
            InputTrees::Many(paths) if paths.len() == 1 => Ok(paths[0].clone()),
            InputTrees::Many(_) => Err(GlobexError::Shape(
                "Does not support more than one input tree".to_string(),
            )),
        }
    }
}

/// Build configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Input tree containing the files to add exports to
    pub input: InputTrees,

    /// Destination tree for the processed files
    pub output: PathBuf,

    /// Output module type (es2015, cjs, amd, umd, system)
    #[serde(default = "default_module_type", alias = "moduleType")]
    pub module_type: String,

    /// Maximum number of files read, rewritten or written concurrently
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,

    /// Single file to process (single-file shape)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Export options for `file`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<FileExportOptions>,
}

impl BuildConfig {
    fn validate(&self) -> Result<()> {
        if self.max_concurrency == 0 {
            return Err(GlobexError::Configuration(
                "build.max_concurrency must be > 0".to_string(),
            ));
        }

        if self.options.is_some() && self.file.is_none() {
            return Err(GlobexError::Configuration(
                "build.options requires build.file".to_string(),
            ));
        }

        Ok(())
    }
}

/// Export options for one file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileExportOptions {
    /// Name of the default export
    #[serde(default, alias = "defaultExport", skip_serializing_if = "Option::is_none")]
    pub default_export: Option<String>,

    /// Named exports, in order
    #[serde(default)]
    pub exports: Vec<String>,
}

impl FileExportOptions {
    /// Build the export spec, naming `file` in the error
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the options are empty
    pub fn to_spec(&self, file: &str) -> Result<ExportSpec> {
        ExportSpec::new(self.default_export.clone(), self.exports.clone()).map_err(|e| match e {
            GlobexError::Configuration(msg) => {
                GlobexError::Configuration(format!("{file}: {msg}"))
            }
            other => other,
        })
    }
}

/// External rewriter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriterConfig {
    /// Command to run
    pub command: String,

    /// Arguments; `{format}` is replaced with the module type
    #[serde(default)]
    pub args: Vec<String>,

    /// Per-file timeout in seconds
    #[serde(default = "default_rewriter_timeout_secs")]
    pub timeout_secs: u64,

    /// Options passed through to the rewriter untouched
    #[serde(default)]
    pub options: toml::Table,
}

impl RewriterConfig {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.command.trim().is_empty() {
            return Err(GlobexError::Configuration(
                "rewriter.command cannot be empty".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(GlobexError::Configuration(
                "rewriter.timeout_secs must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<()> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(GlobexError::Configuration(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            )));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err(GlobexError::Configuration(
                "logging.local_path cannot be empty when local logging is enabled".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_module_type() -> String {
    ModuleFormat::Es2015.as_str().to_string()
}

fn default_max_concurrency() -> usize {
    8
}

fn default_rewriter_timeout_secs() -> u64 {
    60
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> GlobexConfig {
        toml::from_str(
            r#"
[build]
input = "src"
output = "dist"

[files."foo.js"]
default_export = "Foo"
exports = ["bar"]
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = base_config();
        assert_eq!(config.application.log_level, "info");
        assert!(!config.application.dry_run);
        assert_eq!(config.build.module_type, "es2015");
        assert_eq!(config.build.max_concurrency, 8);
        assert!(!config.logging.local_enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_application_config_validation() {
        let mut config = ApplicationConfig::default();
        assert!(config.validate().is_ok());

        config.log_level = "invalid".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_jobs_from_files_table() {
        let jobs = base_config().jobs().unwrap();
        let spec = jobs.get(&FileName::new("foo.js").unwrap()).unwrap();
        assert_eq!(spec.default_export(), Some("Foo"));
        assert_eq!(spec.named_exports(), ["bar"]);
    }

    #[test]
    fn test_jobs_from_single_file_shape() {
        let config: GlobexConfig = toml::from_str(
            r#"
[build]
input = "src"
output = "dist"
file = "lib/foo.js"

[build.options]
defaultExport = "Foo"
"#,
        )
        .unwrap();

        let jobs = config.jobs().unwrap();
        assert_eq!(jobs.len(), 1);
        assert!(jobs.get(&FileName::new("lib/foo.js").unwrap()).is_some());
    }

    #[test]
    fn test_equivalent_file_keys_rejected() {
        let mut config = base_config();
        config.files.insert(
            "./foo.js".to_string(),
            FileExportOptions {
                default_export: Some("Other".to_string()),
                exports: vec![],
            },
        );
        assert!(matches!(config.jobs(), Err(GlobexError::Configuration(_))));
    }

    #[test]
    fn test_both_shapes_rejected() {
        let mut config = base_config();
        config.build.file = Some("other.js".to_string());
        assert!(matches!(config.jobs(), Err(GlobexError::Configuration(_))));
    }

    #[test]
    fn test_no_files_rejected() {
        let mut config = base_config();
        config.files.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_export_options_rejected_with_file_name() {
        let mut config = base_config();
        config
            .files
            .insert("empty.js".to_string(), FileExportOptions::default());

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("empty.js"));
    }

    #[test]
    fn test_single_file_without_options_rejected() {
        let mut config = base_config();
        config.files.clear();
        config.build.file = Some("foo.js".to_string());
        assert!(config.jobs().is_err());
    }

    #[test]
    fn test_input_trees_shape() {
        assert_eq!(
            InputTrees::Single(PathBuf::from("src")).single().unwrap(),
            PathBuf::from("src")
        );
        assert_eq!(
            InputTrees::Many(vec![PathBuf::from("src")]).single().unwrap(),
            PathBuf::from("src")
        );
        assert!(matches!(
            InputTrees::Many(vec![PathBuf::from("a"), PathBuf::from("b")]).single(),
            Err(GlobexError::Shape(_))
        ));
        assert!(matches!(
            InputTrees::Many(vec![]).single(),
            Err(GlobexError::Shape(_))
        ));
    }

    #[test]
    fn test_input_list_deserializes() {
        let config: GlobexConfig = toml::from_str(
            r#"
[build]
input = ["src", "vendor"]
output = "dist"

[files."foo.js"]
default_export = "Foo"
"#,
        )
        .unwrap();

        assert!(matches!(config.validate(), Err(GlobexError::Shape(_))));
    }

    #[test]
    fn test_unknown_module_type_falls_back_to_es2015() {
        let mut config = base_config();
        config.build.module_type = "iife".to_string();
        assert!(config.validate().is_ok());
        assert_eq!(config.module_format(), ModuleFormat::Es2015);
    }

    #[test]
    fn test_delegated_format_requires_rewriter() {
        let mut config = base_config();
        config.build.module_type = "amd".to_string();
        assert!(config.validate().is_err());

        config.rewriter = Some(RewriterConfig {
            command: "babel-rewrite".to_string(),
            args: vec![],
            timeout_secs: 60,
            options: toml::Table::new(),
        });
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let mut config = base_config();
        config.build.max_concurrency = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_logging_config_validation() {
        let mut config = LoggingConfig::default();
        assert!(config.validate().is_ok());

        config.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());
    }
}
