//! Filesystem-backed file tree

use super::FileTree;
use crate::domain::{FileName, GlobexError, Result};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File tree rooted at a local directory
#[derive(Debug, Clone)]
pub struct LocalFileTree {
    root: PathBuf,
}

impl LocalFileTree {
    /// Create a tree rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory of the tree
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl FileTree for LocalFileTree {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    async fn read(&self, file_name: &FileName) -> Result<Option<String>> {
        let path = file_name.resolve(&self.root);
        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(GlobexError::Io(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    async fn write(&self, file_name: &FileName, contents: &str) -> Result<()> {
        let path = file_name.resolve(&self.root);

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                GlobexError::Io(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        tokio::fs::write(&path, contents).await.map_err(|e| {
            GlobexError::Io(format!("Failed to write {}: {}", path.display(), e))
        })?;

        tracing::trace!(path = %path.display(), bytes = contents.len(), "Wrote file");
        Ok(())
    }
}
