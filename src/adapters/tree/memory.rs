//! In-memory file tree

use super::FileTree;
use crate::domain::{FileName, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// File tree held in memory
///
/// Handy as a fixture and for piping results to another stage without
/// touching disk.
#[derive(Debug, Default)]
pub struct MemoryFileTree {
    label: String,
    files: RwLock<BTreeMap<FileName, String>>,
}

impl MemoryFileTree {
    /// Create an empty tree
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            files: RwLock::new(BTreeMap::new()),
        }
    }

    /// Create a tree pre-populated with files
    pub fn from_files<I>(label: impl Into<String>, files: I) -> Self
    where
        I: IntoIterator<Item = (FileName, String)>,
    {
        Self {
            label: label.into(),
            files: RwLock::new(files.into_iter().collect()),
        }
    }

    /// Copy of the current contents
    pub async fn snapshot(&self) -> BTreeMap<FileName, String> {
        self.files.read().await.clone()
    }
}

#[async_trait]
impl FileTree for MemoryFileTree {
    fn describe(&self) -> String {
        format!("memory:{}", self.label)
    }

    async fn read(&self, file_name: &FileName) -> Result<Option<String>> {
        Ok(self.files.read().await.get(file_name).cloned())
    }

    async fn write(&self, file_name: &FileName, contents: &str) -> Result<()> {
        self.files
            .write()
            .await
            .insert(file_name.clone(), contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_write() {
        let foo = FileName::new("foo.js").unwrap();
        let tree = MemoryFileTree::from_files("input", [(foo.clone(), "var a;".to_string())]);

        assert_eq!(tree.read(&foo).await.unwrap(), Some("var a;".to_string()));
        assert_eq!(tree.read(&FileName::new("bar.js").unwrap()).await.unwrap(), None);

        tree.write(&foo, "var b;").await.unwrap();
        assert_eq!(tree.snapshot().await[&foo], "var b;");
        assert_eq!(tree.describe(), "memory:input");
    }
}
