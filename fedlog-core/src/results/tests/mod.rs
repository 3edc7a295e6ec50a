use crate::results::{AnalysisResults, ResultsError, load_results, save_results};
use crate::scan::{LogAnalysis, TestRunAnalysis, VersionDirectoryAnalysis, VersionSummary};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn sample_results() -> AnalysisResults {
    let first = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_milli_opt(0, 0, 0, 0)
        .unwrap();
    let last = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_milli_opt(0, 0, 10, 250)
        .unwrap();

    let cli = LogAnalysis {
        file: PathBuf::from("baseline/test-run1/fedimint-cli.log"),
        error_count: 1,
        warn_count: 2,
        first_timestamp: Some(first),
        last_timestamp: Some(last),
        duration_seconds: Some(10.25),
        success: true,
        notable_issues: vec!["Disco box error".to_string()],
    };

    let mut results = AnalysisResults::new();
    results.insert(
        "baseline",
        VersionDirectoryAnalysis {
            version_dir: PathBuf::from("baseline"),
            test_runs: vec![TestRunAnalysis {
                run_dir: PathBuf::from("baseline/test-run1"),
                cli_analysis: Some(cli),
                peer_analysis: None,
            }],
            summary: VersionSummary {
                total_runs: 1,
                successful_runs: 1,
                avg_duration: Some(10.25),
                median_duration: Some(10.25),
                min_duration: Some(10.25),
                max_duration: Some(10.25),
                total_errors: 1,
                total_warnings: 2,
            },
        },
    );
    results
}

#[test]
fn saved_results_load_back_identically() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("log_analysis_results.json");
    let results = sample_results();

    // Act
    save_results(&path, &results).unwrap();
    let loaded = load_results(&path).unwrap();

    // Assert
    assert_eq!(loaded, results);
}

#[test]
fn saved_json_maps_labels_to_analyses_with_explicit_nulls() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("results.json");

    // Act
    save_results(&path, &sample_results()).unwrap();
    let json: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

    // Assert
    let run = &json["baseline"]["test_runs"][0];
    assert_eq!(run["peer_analysis"], Value::Null);
    assert_eq!(run["cli_analysis"]["first_timestamp"], "2024-01-01T00:00:00");
    assert_eq!(run["cli_analysis"]["last_timestamp"], "2024-01-01T00:00:10.250");
    assert_eq!(json["baseline"]["summary"]["total_runs"], 1);
}

#[test]
fn load_results_reports_missing_file() {
    // Arrange
    let dir = tempdir().unwrap();

    // Act
    let err = load_results(&dir.path().join("absent.json")).unwrap_err();

    // Assert
    assert!(matches!(err, ResultsError::Read { .. }), "got {err:?}");
}

#[test]
fn load_results_reports_malformed_json() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("results.json");
    fs::write(&path, r#"{"baseline": {"summary": 3}}"#).unwrap();

    // Act
    let err = load_results(&path).unwrap_err();

    // Assert
    assert!(matches!(err, ResultsError::Parse { .. }), "got {err:?}");
}
