//! Log Scanning Pipeline
//!
//! Turns a directory tree of harness logs into per-version aggregates:
//!
//! version dir
//! test-run* dirs (sorted by name)
//! cli / peer log file (glob)
//! LogScanner (one pass over the lines)
//! LogAnalysis
//! SummaryAccumulator
//! VersionSummary
//!
//! Per-file problems never abort the pipeline: an unreadable log becomes a
//! notable issue in its own `LogAnalysis`, a missing log leaves the field
//! unset. Only a version directory that cannot be listed is an error.

mod analyzer;
mod discover;
mod error;
mod issues;
mod log_file;
mod stats;
#[cfg(test)]
mod tests;
mod timestamp;
mod types;

pub use analyzer::Analyzer;
pub use discover::{discover_files, list_run_dirs};
pub use error::ScanError;
pub use issues::IssueMatcher;
pub use log_file::LogScanner;
pub use stats::{DurationStats, SummaryAccumulator};
pub use timestamp::TimestampExtractor;
pub use types::{LogAnalysis, TestRunAnalysis, VersionDirectoryAnalysis, VersionSummary};
