//! Domain identifier types with validation
//!
//! This module provides the newtype wrapper used to key jobs and output files.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

/// Relative file name inside a source or destination tree
///
/// Stored with forward slashes and without `.` or empty segments, so
/// `./lib//foo.js` and `lib/foo.js` are the same job key on every platform.
/// The directory portion is kept so outputs land at the same relative
/// location in the destination tree.
///
/// # Examples
///
/// ```
/// use globex::domain::ids::FileName;
/// use std::str::FromStr;
///
/// let name = FileName::from_str("lib/foo.js").unwrap();
/// assert_eq!(name.as_str(), "lib/foo.js");
/// assert!(FileName::from_str("../escape.js").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FileName(String);

impl FileName {
    /// Creates a new FileName from a string
    ///
    /// # Returns
    ///
    /// Returns `Err` if the name is empty, absolute, or climbs out of the
    /// tree with `..`
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into().replace('\\', "/");
        if name.trim().is_empty() {
            return Err("File name cannot be empty".to_string());
        }

        let path = Path::new(&name);
        if path.is_absolute() || name.starts_with('/') {
            return Err(format!("File name must be relative, got: {name}"));
        }
        if path.components().any(|c| matches!(c, Component::ParentDir)) {
            return Err(format!(
                "File name must not contain '..' components, got: {name}"
            ));
        }

        let normalized = name
            .split('/')
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .collect::<Vec<_>>()
            .join("/");
        if normalized.is_empty() {
            return Err(format!("File name must name a file, got: {name}"));
        }

        Ok(Self(normalized))
    }

    /// Returns the file name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Directory portion of the name, if any
    pub fn parent(&self) -> Option<&str> {
        self.0.rsplit_once('/').map(|(dir, _)| dir)
    }

    /// Resolves the name against a tree root
    pub fn resolve(&self, root: &Path) -> PathBuf {
        self.0
            .split('/')
            .fold(root.to_path_buf(), |path, segment| path.join(segment))
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FileName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for FileName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FileName> for String {
    fn from(name: FileName) -> Self {
        name.0
    }
}

impl AsRef<str> for FileName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
