//! Export jobs keyed by file name

use crate::domain::{ExportSpec, FileName, GlobexError, Result};
use std::collections::btree_map;
use std::collections::BTreeMap;

/// The files to process and the exports to append to each
///
/// Both the single-file and the multi-file call shapes end up here; the
/// single-file form is a one-entry batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportJobs {
    jobs: BTreeMap<FileName, ExportSpec>,
}

impl ExportJobs {
    /// Jobs for a single file
    pub fn single(file_name: FileName, spec: ExportSpec) -> Self {
        let mut jobs = BTreeMap::new();
        jobs.insert(file_name, spec);
        Self { jobs }
    }

    /// Jobs for many files
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a file name appears twice.
    pub fn batch<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (FileName, ExportSpec)>,
    {
        let mut jobs = BTreeMap::new();
        for (file_name, spec) in entries {
            if jobs.contains_key(&file_name) {
                return Err(GlobexError::Configuration(format!(
                    "Duplicate export job for file: {file_name}"
                )));
            }
            jobs.insert(file_name, spec);
        }
        Ok(Self { jobs })
    }

    /// Number of jobs
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Whether there are no jobs
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Spec for a file, if it has a job
    pub fn get(&self, file_name: &FileName) -> Option<&ExportSpec> {
        self.jobs.get(file_name)
    }

    /// Jobs in file name order
    pub fn iter(&self) -> btree_map::Iter<'_, FileName, ExportSpec> {
        self.jobs.iter()
    }

    /// File names in order
    pub fn file_names(&self) -> impl Iterator<Item = &FileName> {
        self.jobs.keys()
    }
}

impl<'a> IntoIterator for &'a ExportJobs {
    type Item = (&'a FileName, &'a ExportSpec);
    type IntoIter = btree_map::Iter<'a, FileName, ExportSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.jobs.iter()
    }
}
