//! Module formats

use super::errors::GlobexError;
use super::result::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target module format for the generated exports
///
/// `Es2015` and `CommonJs` have native export templates. The remaining
/// formats are rendered with the ES module template and then handed to an
/// external source rewriter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleFormat {
    /// ES2015 `export` statements
    #[default]
    Es2015,
    /// CommonJS `exports.*` assignments
    #[serde(rename = "cjs")]
    CommonJs,
    /// AMD `define` wrapper (delegated)
    Amd,
    /// UMD wrapper (delegated)
    Umd,
    /// SystemJS `System.register` (delegated)
    #[serde(rename = "system")]
    SystemJs,
}

impl ModuleFormat {
    /// Resolves an optional identifier, falling back to ES2015
    ///
    /// Absent or unrecognized identifiers select `Es2015`. Only unrecognized
    /// ones are logged.
    pub fn from_identifier(identifier: Option<&str>) -> Self {
        match identifier {
            None => Self::Es2015,
            Some(id) => id.parse().unwrap_or_else(|_| {
                tracing::warn!(
                    module_type = %id,
                    "Unrecognized module type, falling back to es2015"
                );
                Self::Es2015
            }),
        }
    }

    /// Canonical identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Es2015 => "es2015",
            Self::CommonJs => "cjs",
            Self::Amd => "amd",
            Self::Umd => "umd",
            Self::SystemJs => "system",
        }
    }

    /// Native format whose template renders the export statements
    pub fn template_format(&self) -> ModuleFormat {
        match self {
            Self::CommonJs => Self::CommonJs,
            _ => Self::Es2015,
        }
    }

    /// Whether the merged source must go through an external rewriter
    pub fn requires_rewrite(&self) -> bool {
        matches!(self, Self::Amd | Self::Umd | Self::SystemJs)
    }

    /// All identifiers accepted by [`FromStr`]
    pub fn known_identifiers() -> &'static [&'static str] {
        &[
            "es2015", "es6", "esm", "cjs", "commonjs", "common", "amd", "umd", "system",
            "systemjs",
        ]
    }
}

impl fmt::Display for ModuleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleFormat {
    type Err = GlobexError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "es2015" | "es6" | "esm" => Ok(Self::Es2015),
            "cjs" | "commonjs" | "common" => Ok(Self::CommonJs),
            "amd" => Ok(Self::Amd),
            "umd" => Ok(Self::Umd),
            "system" | "systemjs" => Ok(Self::SystemJs),
            _ => Err(GlobexError::Configuration(format!(
                "Invalid module type: {s}. Expected one of: {}",
                Self::known_identifiers().join(", ")
            ))),
        }
    }
}
