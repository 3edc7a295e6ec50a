use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Signals extracted from one log file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogAnalysis {
    pub file: PathBuf,
    pub error_count: u64,
    pub warn_count: u64,
    pub first_timestamp: Option<NaiveDateTime>,
    pub last_timestamp: Option<NaiveDateTime>,
    /// `last_timestamp - first_timestamp`, present iff both are.
    pub duration_seconds: Option<f64>,
    pub success: bool,
    /// One entry per matching phrase per line; duplicates are expected.
    pub notable_issues: Vec<String>,
}

impl LogAnalysis {
    pub fn empty(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            error_count: 0,
            warn_count: 0,
            first_timestamp: None,
            last_timestamp: None,
            duration_seconds: None,
            success: false,
            notable_issues: Vec::new(),
        }
    }

    /// Notable issues collapsed to `(label, occurrences)` in first-seen order.
    pub fn issue_counts(&self) -> Vec<(&str, usize)> {
        let mut counts: Vec<(&str, usize)> = Vec::new();

        for issue in &self.notable_issues {
            match counts.iter_mut().find(|(label, _)| *label == issue.as_str()) {
                Some((_, count)) => *count += 1,
                None => counts.push((issue.as_str(), 1)),
            }
        }

        counts
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestRunAnalysis {
    pub run_dir: PathBuf,
    pub cli_analysis: Option<LogAnalysis>,
    pub peer_analysis: Option<LogAnalysis>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VersionSummary {
    pub total_runs: u64,
    pub successful_runs: u64,
    pub avg_duration: Option<f64>,
    pub median_duration: Option<f64>,
    pub min_duration: Option<f64>,
    pub max_duration: Option<f64>,
    /// CLI and peer errors summed together.
    pub total_errors: u64,
    pub total_warnings: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionDirectoryAnalysis {
    pub version_dir: PathBuf,
    pub test_runs: Vec<TestRunAnalysis>,
    pub summary: VersionSummary,
}
