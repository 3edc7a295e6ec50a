use crate::scan::{TestRunAnalysis, VersionSummary};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    pub avg: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
}

impl DurationStats {
    /// `None` for an empty sample.
    ///
    /// The median is the element at index `len / 2` of the sorted sample: for
    /// even lengths that is the upper of the two middle values, not their mean.
    pub fn from_durations(durations: &[f64]) -> Option<Self> {
        if durations.is_empty() {
            return None;
        }

        let mut sorted = durations.to_vec();
        sorted.sort_by(f64::total_cmp);

        Some(Self {
            avg: durations.iter().sum::<f64>() / durations.len() as f64,
            median: sorted[sorted.len() / 2],
            min: sorted[0],
            max: sorted[sorted.len() - 1],
        })
    }
}

/// Folds the runs of one version into a [`VersionSummary`].
#[derive(Debug, Default)]
pub struct SummaryAccumulator {
    total_runs: u64,
    successful_runs: u64,
    total_errors: u64,
    total_warnings: u64,
    durations: Vec<f64>,
}

impl SummaryAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, run: &TestRunAnalysis) {
        self.total_runs += 1;

        // Success and duration only come from the client log.
        if let Some(cli) = &run.cli_analysis {
            if cli.success {
                self.successful_runs += 1;
            }
            if let Some(duration) = cli.duration_seconds {
                self.durations.push(duration);
            }
            self.total_errors += cli.error_count;
            self.total_warnings += cli.warn_count;
        }

        if let Some(peer) = &run.peer_analysis {
            self.total_errors += peer.error_count;
            self.total_warnings += peer.warn_count;
        }
    }

    pub fn finish(self) -> VersionSummary {
        let stats = DurationStats::from_durations(&self.durations);

        VersionSummary {
            total_runs: self.total_runs,
            successful_runs: self.successful_runs,
            avg_duration: stats.map(|s| s.avg),
            median_duration: stats.map(|s| s.median),
            min_duration: stats.map(|s| s.min),
            max_duration: stats.map(|s| s.max),
            total_errors: self.total_errors,
            total_warnings: self.total_warnings,
        }
    }
}
