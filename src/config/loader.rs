//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{GlobexConfig, InputTrees, RewriterConfig};
use crate::domain::errors::GlobexError;
use crate::domain::result::Result;
use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into GlobexConfig
/// 4. Applies environment variable overrides (GLOBEX_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use globex::config::loader::load_config;
///
/// let config = load_config("globex.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<GlobexConfig> {
    let path = path.as_ref();
    let config = parse_config(&read_config_file(path)?)?;

    tracing::debug!(path = %path.display(), "Configuration loaded");
    Ok(config)
}

/// Loads only the `[rewriter]` section of a configuration file
///
/// Every other table is ignored, so a file holding nothing but a rewriter
/// is enough. `${VAR}` substitution and `GLOBEX_REWRITER_COMMAND` apply as
/// in [`load_config`].
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if the
/// rewriter section is invalid
pub fn load_rewriter_config(path: impl AsRef<Path>) -> Result<Option<RewriterConfig>> {
    #[derive(Deserialize)]
    struct RewriterOnly {
        #[serde(default)]
        rewriter: Option<RewriterConfig>,
    }

    let path = path.as_ref();
    let contents = substitute_env_vars(&read_config_file(path)?)?;
    let parsed: RewriterOnly = toml::from_str(&contents)
        .map_err(|e| GlobexError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    let mut rewriter = parsed.rewriter;
    apply_rewriter_override(&mut rewriter);

    if let Some(config) = &rewriter {
        config.validate()?;
    }

    tracing::debug!(path = %path.display(), found = rewriter.is_some(), "Rewriter configuration loaded");
    Ok(rewriter)
}

fn read_config_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(GlobexError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    fs::read_to_string(path).map_err(|e| {
        GlobexError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })
}

/// Parses configuration from TOML text
///
/// Runs the same substitution, override and validation steps as
/// [`load_config`].
///
/// # Errors
///
/// Returns an error if parsing or validation fails
pub fn parse_config(contents: &str) -> Result<GlobexConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: GlobexConfig = toml::from_str(&contents)
        .map_err(|e| GlobexError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;
    config.build.module_type = config.module_format().as_str().to_string();

    // Shape errors keep their own kind so the CLI can report them apart.
    config.validate().map_err(|e| match e {
        GlobexError::Configuration(msg) => {
            GlobexError::Configuration(format!("Configuration validation failed: {}", msg))
        }
        other => other,
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| GlobexError::Other(format!("Invalid substitution pattern: {}", e)))?;
    let mut lines = Vec::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_string());
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        lines.push(processed_line);
    }

    if !missing_vars.is_empty() {
        return Err(GlobexError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(lines.join("\n"))
}

/// Applies environment variable overrides using GLOBEX_* prefix
///
/// Environment variables follow the pattern: GLOBEX_<SECTION>_<KEY>
/// For example: GLOBEX_BUILD_OUTPUT, GLOBEX_BUILD_MODULE_TYPE
fn apply_env_overrides(config: &mut GlobexConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("GLOBEX_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("GLOBEX_APPLICATION_DRY_RUN") {
        config.application.dry_run = parse_bool_override("GLOBEX_APPLICATION_DRY_RUN", &val)?;
    }

    // Build overrides
    if let Ok(val) = std::env::var("GLOBEX_BUILD_INPUT") {
        config.build.input = InputTrees::Single(PathBuf::from(val));
    }
    if let Ok(val) = std::env::var("GLOBEX_BUILD_OUTPUT") {
        config.build.output = PathBuf::from(val);
    }
    if let Ok(val) = std::env::var("GLOBEX_BUILD_MODULE_TYPE") {
        config.build.module_type = val;
    }
    if let Ok(val) = std::env::var("GLOBEX_BUILD_MAX_CONCURRENCY") {
        match val.parse() {
            Ok(concurrency) => config.build.max_concurrency = concurrency,
            Err(_) => {
                return Err(GlobexError::Configuration(format!(
                    "GLOBEX_BUILD_MAX_CONCURRENCY must be a positive integer, got '{}'",
                    val
                )))
            }
        }
    }

    // Rewriter overrides
    apply_rewriter_override(&mut config.rewriter);

    // Logging overrides
    if let Ok(val) = std::env::var("GLOBEX_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_bool_override("GLOBEX_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("GLOBEX_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}

/// Applies GLOBEX_REWRITER_COMMAND, creating the section when it is missing
fn apply_rewriter_override(rewriter: &mut Option<RewriterConfig>) {
    if let Ok(val) = std::env::var("GLOBEX_REWRITER_COMMAND") {
        match rewriter {
            Some(existing) => existing.command = val,
            None => {
                *rewriter = Some(RewriterConfig {
                    command: val,
                    args: Vec::new(),
                    timeout_secs: 60,
                    options: toml::Table::new(),
                })
            }
        }
    }
}

fn parse_bool_override(name: &str, val: &str) -> Result<bool> {
    match val.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(GlobexError::Configuration(format!(
            "{} must be a boolean (true or false), got '{}'",
            name, val
        ))),
    }
}
