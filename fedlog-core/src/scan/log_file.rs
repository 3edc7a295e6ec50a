use crate::scan::{IssueMatcher, LogAnalysis, TimestampExtractor};
use std::path::PathBuf;

const ERROR_TOKEN: &str = "ERROR";
const WARN_TOKEN: &str = "WARN";

/// Single-pass accumulator for one log file.
///
/// Lines are pushed in file order; `finish` derives the duration and hands
/// back the immutable [`LogAnalysis`].
pub struct LogScanner<'a> {
    timestamps: &'a TimestampExtractor,
    issues: &'a IssueMatcher,
    success_marker: &'a str,
    analysis: LogAnalysis,
}

impl<'a> LogScanner<'a> {
    pub fn new(
        file: impl Into<PathBuf>,
        timestamps: &'a TimestampExtractor,
        issues: &'a IssueMatcher,
        success_marker: &'a str,
    ) -> Self {
        Self {
            timestamps,
            issues,
            success_marker,
            analysis: LogAnalysis::empty(file),
        }
    }

    pub fn push_line(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }

        let analysis = &mut self.analysis;

        // Counted per line, not per occurrence.
        if line.contains(ERROR_TOKEN) {
            analysis.error_count += 1;
        }
        if line.contains(WARN_TOKEN) {
            analysis.warn_count += 1;
        }

        if let Some(ts) = self.timestamps.extract(line) {
            analysis.first_timestamp.get_or_insert(ts);
            analysis.last_timestamp = Some(ts);
        }

        if line.contains(self.success_marker) {
            analysis.success = true;
        }

        analysis
            .notable_issues
            .extend(self.issues.matches(line).map(str::to_string));
    }

    /// Feed a whole decoded file. `\n`, `\r\n` and bare `\r` all end a line.
    pub fn push_text(&mut self, text: &str) {
        for line in text.split(['\n', '\r']) {
            self.push_line(line);
        }
    }

    pub fn finish(mut self) -> LogAnalysis {
        if let (Some(first), Some(last)) = (
            self.analysis.first_timestamp,
            self.analysis.last_timestamp,
        ) {
            let elapsed = last.signed_duration_since(first);
            self.analysis.duration_seconds = Some(match elapsed.num_microseconds() {
                Some(us) => us as f64 / 1_000_000.0,
                None => elapsed.num_seconds() as f64,
            });
        }

        self.analysis
    }
}
