//! The persisted analysis artifact: version label -> aggregate analysis.

mod error;
mod store;
#[cfg(test)]
mod tests;

pub use error::ResultsError;
pub use store::{load_results, save_results};

use crate::scan::VersionDirectoryAnalysis;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisResults {
    versions: BTreeMap<String, VersionDirectoryAnalysis>,
}

impl AnalysisResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, analysis: VersionDirectoryAnalysis) {
        self.versions.insert(label.into(), analysis);
    }

    pub fn get(&self, label: &str) -> Option<&VersionDirectoryAnalysis> {
        self.versions.get(label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.versions.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}
