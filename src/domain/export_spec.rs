//! Export specification for a single file

use super::errors::GlobexError;
use super::result::Result;
use serde::Serialize;

const EMPTY_SPEC_MESSAGE: &str = "Must provide either default or named exports, or both.";

/// The exports to append to one file
///
/// Validated on construction: a spec always carries a default export, at
/// least one named export, or both. Named exports keep their input order.
///
/// # Examples
///
/// ```
/// use globex::domain::ExportSpec;
///
/// let spec = ExportSpec::new(Some("Foo".to_string()), vec!["bar".to_string()]).unwrap();
/// assert_eq!(spec.default_export(), Some("Foo"));
/// assert_eq!(spec.named_exports(), ["bar".to_string()]);
///
/// assert!(ExportSpec::new(None, vec![]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSpec {
    default_export: Option<String>,
    named_exports: Vec<String>,
}

impl ExportSpec {
    /// Creates a new export spec
    ///
    /// A default export that is empty or only whitespace counts as absent.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when there is neither a default export
    /// nor any named export.
    pub fn new(default_export: Option<String>, named_exports: Vec<String>) -> Result<Self> {
        let default_export = default_export.filter(|name| !name.trim().is_empty());

        if default_export.is_none() && named_exports.is_empty() {
            return Err(GlobexError::Configuration(EMPTY_SPEC_MESSAGE.to_string()));
        }

        Ok(Self {
            default_export,
            named_exports,
        })
    }

    /// Spec with only a default export
    pub fn default_only(name: impl Into<String>) -> Result<Self> {
        Self::new(Some(name.into()), Vec::new())
    }

    /// Spec with only named exports
    pub fn named_only<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(None, names.into_iter().map(Into::into).collect())
    }

    /// Name of the default export, if any
    pub fn default_export(&self) -> Option<&str> {
        self.default_export.as_deref()
    }

    /// Named exports in declaration order
    pub fn named_exports(&self) -> &[String] {
        &self.named_exports
    }

    /// Whether a default export is present
    pub fn has_default_export(&self) -> bool {
        self.default_export.is_some()
    }
}
