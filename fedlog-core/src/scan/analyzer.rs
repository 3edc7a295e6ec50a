use crate::conf::{AnalyzerConfig, VersionConfig};
use crate::results::AnalysisResults;
use crate::scan::{
    IssueMatcher, LogAnalysis, LogScanner, ScanError, SummaryAccumulator, TestRunAnalysis,
    TimestampExtractor, VersionDirectoryAnalysis, discover_files, list_run_dirs,
};
use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Scan settings resolved from an [`AnalyzerConfig`].
#[derive(Debug, Clone)]
pub struct Analyzer {
    timestamps: TimestampExtractor,
    issues: IssueMatcher,
    success_marker: String,
    run_dir_prefix: String,
    cli_log_glob: String,
    peer_log_glob: String,
}

impl Analyzer {
    pub fn new(cfg: &AnalyzerConfig) -> Self {
        Self {
            timestamps: TimestampExtractor::today(),
            issues: IssueMatcher::new(&cfg.known_issues),
            success_marker: cfg.success_marker.clone(),
            run_dir_prefix: cfg.run_dir_prefix.clone(),
            cli_log_glob: cfg.cli_log_glob.clone(),
            peer_log_glob: cfg.peer_log_glob.clone(),
        }
    }

    /// Date used for timestamps that carry only a time of day.
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.timestamps = TimestampExtractor::with_reference_date(date);
        self
    }

    /// Scan one log file. Never fails: a read error is recorded as a notable
    /// issue and every other field keeps its empty default.
    pub fn analyze_log_file(&self, path: &Path) -> LogAnalysis {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(file = %path.display(), error = %e, "failed to read log file");
                let mut analysis = LogAnalysis::empty(path);
                analysis
                    .notable_issues
                    .push(format!("Failed to read file: {e}"));
                return analysis;
            }
        };

        let text = String::from_utf8_lossy(&bytes);
        let mut scanner = LogScanner::new(path, &self.timestamps, &self.issues, &self.success_marker);
        scanner.push_text(&text);

        let analysis = scanner.finish();
        debug!(
            file = %path.display(),
            errors = analysis.error_count,
            warnings = analysis.warn_count,
            success = analysis.success,
            "scanned log file"
        );
        analysis
    }

    /// Analyze the CLI and peer logs of one run directory. A log that is not
    /// present leaves its field unset.
    pub fn analyze_test_run(&self, run_dir: &Path) -> Result<TestRunAnalysis, ScanError> {
        let cli_analysis = self.analyze_first_match(run_dir, &self.cli_log_glob)?;
        let peer_analysis = self.analyze_first_match(run_dir, &self.peer_log_glob)?;

        if cli_analysis.is_none() {
            debug!(run_dir = %run_dir.display(), "no cli log in run directory");
        }

        Ok(TestRunAnalysis {
            run_dir: run_dir.to_path_buf(),
            cli_analysis,
            peer_analysis,
        })
    }

    fn analyze_first_match(
        &self,
        run_dir: &Path,
        pattern: &str,
    ) -> Result<Option<LogAnalysis>, ScanError> {
        let matches = discover_files(run_dir, pattern)?;

        if matches.len() > 1 {
            debug!(
                run_dir = %run_dir.display(),
                pattern,
                count = matches.len(),
                "several logs match, using the first by name"
            );
        }

        Ok(matches.first().map(|path| self.analyze_log_file(path)))
    }

    pub fn analyze_version_directory(
        &self,
        version_dir: &Path,
    ) -> Result<VersionDirectoryAnalysis, ScanError> {
        let run_dirs = list_run_dirs(version_dir, &self.run_dir_prefix)?;

        let mut summary = SummaryAccumulator::new();
        let mut test_runs = Vec::with_capacity(run_dirs.len());

        for run_dir in &run_dirs {
            let run = self.analyze_test_run(run_dir)?;
            summary.push(&run);
            test_runs.push(run);
        }

        Ok(VersionDirectoryAnalysis {
            version_dir: version_dir.to_path_buf(),
            test_runs,
            summary: summary.finish(),
        })
    }

    /// Analyze every configured version found under `root`. Versions whose
    /// directory does not exist are skipped with a warning.
    pub fn analyze_versions(
        &self,
        root: &Path,
        versions: &[VersionConfig],
    ) -> Result<AnalysisResults, ScanError> {
        let mut results = AnalysisResults::new();

        for version in versions {
            let dir = root.join(version.dir_name());
            if !dir.exists() {
                warn!(version = %version.label, dir = %dir.display(), "version directory not found");
                continue;
            }

            info!(version = %version.label, "analyzing version");
            let analysis = self.analyze_version_directory(&dir)?;
            info!(
                version = %version.label,
                runs = analysis.summary.total_runs,
                successful = analysis.summary.successful_runs,
                "version analyzed"
            );
            results.insert(version.label.clone(), analysis);
        }

        Ok(results)
    }
}
