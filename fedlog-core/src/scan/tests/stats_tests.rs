use crate::scan::{DurationStats, LogAnalysis, SummaryAccumulator, TestRunAnalysis};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn log(errors: u64, warnings: u64, success: bool, duration: Option<f64>) -> LogAnalysis {
    LogAnalysis {
        error_count: errors,
        warn_count: warnings,
        success,
        duration_seconds: duration,
        ..LogAnalysis::empty("x.log")
    }
}

fn run(cli: Option<LogAnalysis>, peer: Option<LogAnalysis>) -> TestRunAnalysis {
    TestRunAnalysis {
        run_dir: PathBuf::from("test-run"),
        cli_analysis: cli,
        peer_analysis: peer,
    }
}

#[test]
fn median_of_even_sample_is_upper_middle() {
    // Act
    let stats = DurationStats::from_durations(&[4.0, 1.0, 3.0, 2.0]).unwrap();

    // Assert
    assert_eq!(stats.median, 3.0);
    assert_eq!(stats.avg, 2.5);
    assert_eq!(stats.min, 1.0);
    assert_eq!(stats.max, 4.0);
}

#[test]
fn two_durations_aggregate_as_expected() {
    // Act
    let stats = DurationStats::from_durations(&[6.0, 4.0]).unwrap();

    // Assert
    assert_eq!(
        stats,
        DurationStats {
            avg: 5.0,
            median: 6.0,
            min: 4.0,
            max: 6.0,
        }
    );
}

#[test]
fn empty_sample_has_no_statistics() {
    // Act
    let stats = DurationStats::from_durations(&[]);

    // Assert
    assert_eq!(stats, None);
}

#[test]
fn summary_sums_cli_and_peer_counts_but_only_cli_drives_success() {
    // Arrange
    let mut acc = SummaryAccumulator::new();

    // Act
    acc.push(&run(
        Some(log(1, 2, true, Some(4.0))),
        Some(log(10, 20, true, Some(100.0))),
    ));
    acc.push(&run(Some(log(0, 1, false, Some(6.0))), None));
    acc.push(&run(None, Some(log(5, 0, true, None))));
    let summary = acc.finish();

    // Assert
    assert_eq!(summary.total_runs, 3);
    assert_eq!(summary.successful_runs, 1);
    assert_eq!(summary.total_errors, 16);
    assert_eq!(summary.total_warnings, 23);
    assert_eq!(summary.avg_duration, Some(5.0));
    assert_eq!(summary.median_duration, Some(6.0));
    assert_eq!(summary.min_duration, Some(4.0));
    assert_eq!(summary.max_duration, Some(6.0));
}

#[test]
fn summary_without_durations_leaves_statistics_unset() {
    // Arrange
    let mut acc = SummaryAccumulator::new();

    // Act
    acc.push(&run(Some(log(0, 0, true, None)), None));
    let summary = acc.finish();

    // Assert
    assert_eq!(summary.total_runs, 1);
    assert_eq!(summary.successful_runs, 1);
    assert_eq!(summary.avg_duration, None);
    assert_eq!(summary.median_duration, None);
    assert_eq!(summary.min_duration, None);
    assert_eq!(summary.max_duration, None);
}
