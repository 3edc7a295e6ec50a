use fedlog_core::cli::report::ReportArgs;
use integration_tests::harness::{Workspace, captured_events, init_test_tracing};
use pretty_assertions::assert_eq;
use std::fs;
use tracing::Level;

/// Two versions with two runs each. Baseline joins in 10s and 20s; the
/// candidate joins once in 30s and fails once after hitting a DNS error.
fn two_version_workspace() -> Workspace {
    let ws = Workspace::new();

    ws.run("baseline", "test-run1")
        .cli_log(&[
            "2024-01-01T10:00:00.000Z INFO starting client",
            "2024-01-01T10:00:10.000Z INFO \"joined\" federation",
        ])
        .peer_log(&["2024-01-01T10:00:00.000Z ERROR peer hiccup"]);
    ws.run("baseline", "test-run2").cli_log(&[
        "2024-01-01T10:00:00.000Z WARN slow handshake",
        "2024-01-01T10:00:20.000Z INFO \"joined\" federation",
    ]);

    ws.run("v0.8.0-beta.2", "test-run1").cli_log(&[
        "2024-01-01T11:00:00.000Z INFO starting client",
        "2024-01-01T11:00:15.000Z ERROR Failed to open Disco Box",
        "2024-01-01T11:00:30.000Z INFO \"joined\" federation",
    ]);
    ws.run("v0.8.0-beta.2", "test-run2")
        .cli_log(&["2024-01-01T11:00:00.000Z ERROR lookup of dns.iroh.link failed"]);

    ws
}

#[test]
fn analyze_persists_results_and_prints_summary() {
    // Arrange
    let ws = two_version_workspace();

    // Act
    let summary = ws.analyze().unwrap();

    // Assert
    let results = ws.load_results();
    assert_eq!(results.len(), 2);

    let baseline = &results.get("baseline").unwrap().summary;
    assert_eq!(baseline.total_runs, 2);
    assert_eq!(baseline.successful_runs, 2);
    assert_eq!(baseline.avg_duration, Some(15.0));
    assert_eq!(baseline.median_duration, Some(20.0));
    assert_eq!(baseline.total_errors, 1);
    assert_eq!(baseline.total_warnings, 1);

    let candidate = &results.get("v0.8.0-beta.2").unwrap().summary;
    assert_eq!(candidate.successful_runs, 1);
    assert_eq!(candidate.min_duration, Some(0.0));
    assert_eq!(candidate.max_duration, Some(30.0));

    assert!(summary.contains("BASELINE\n"));
    assert!(summary.contains("Success rate: 2/2 (100.0%)\n"));
    assert!(summary.contains("Success rate: 1/2 (50.0%)\n"));
    assert!(summary.contains("COMPARATIVE ANALYSIS (vs baseline)\n"));
    assert!(summary.contains("  Duration change: +0.00s (+0.0%)\n"));
    assert!(summary.contains("  Error change: +1\n"));
    assert!(summary.contains("  Warning change: -1\n"));
    assert!(summary.contains("  Success rate change: -50.0%\n"));
}

#[test]
fn report_renders_markdown_from_saved_results() {
    // Arrange
    let ws = two_version_workspace();
    ws.analyze().unwrap();

    // Act
    let markdown = ws.report().unwrap();

    // Assert
    let expected = concat!(
        "# FEDIMINT v0.8.0-beta.2 REGRESSION ANALYSIS - DETAILED REPORT\n",
        "\n",
        "## Performance Statistics Summary\n",
        "\n",
        "| Version | Avg (s) | Median (s) | Min (s) | Max (s) | Range (s) | Success Rate |\n",
        "|---------|---------|------------|---------|---------|-----------|--------------|\n",
        "| v0.7.2 (baseline) | 15.00 | 20.00 | 10.00 | 20.00 | 10.00 | 2/2 (100%) |\n",
        "| v0.8.0-beta.2 (self-hosted) | 15.00 | 30.00 | 0.00 | 30.00 | 0.00 | 1/2 (100%) |\n",
        "\n",
        "## Performance Comparison (vs Baseline)\n",
        "\n",
        "| Version | Avg Change | Median Change | Min Change | Max Change |\n",
        "|---------|------------|---------------|------------|------------|\n",
        "| v0.8.0-beta.2 (self-hosted) | +0.0% | +50.0% | -100.0% | +50.0% |\n",
        "\n",
        "## Error and Warning Analysis\n",
        "\n",
        "| Version | CLI Errors | Total Warnings | Errors vs Baseline | Warnings vs Baseline |\n",
        "|---------|------------|----------------|--------------------|--------------------|\n",
        "| v0.7.2 (baseline) | 1 | 1 | - | - |\n",
        "| v0.8.0-beta.2 (self-hosted) | 2 | 0 | +1 | -1 |\n",
        "\n",
        "## Individual Test Run Details\n",
        "\n",
        "### v0.7.2 (baseline)\n",
        "\n",
        "| Run | Duration (s) | Success | CLI Errors | CLI Warnings | Notable Issues |\n",
        "|-----|--------------|---------|------------|--------------|----------------|\n",
        "| 1 | 10.00 | ✅ | 0 | 0 | None |\n",
        "| 2 | 20.00 | ✅ | 0 | 1 | None |\n",
        "\n",
        "### v0.8.0-beta.2 (self-hosted)\n",
        "\n",
        "| Run | Duration (s) | Success | CLI Errors | CLI Warnings | Notable Issues |\n",
        "|-----|--------------|---------|------------|--------------|----------------|\n",
        "| 1 | 30.00 | ✅ | 1 | 0 | Disco box error (1), Failed to open disco box (1) |\n",
        "| 2 | 0.00 | ❌ | 1 | 0 | DNS resolution failure (1) |\n",
        "\n",
    );
    assert_eq!(markdown, expected);
}

#[test]
fn report_writes_to_output_file() {
    // Arrange
    let ws = two_version_workspace();
    ws.analyze().unwrap();
    let output = ws.root().join("REPORT.md");
    let args = ReportArgs {
        output: Some(output.clone()),
        ..ws.report_args()
    };

    // Act
    let mut stdout = Vec::new();
    fedlog_core::cli::report::report(&args, &mut stdout).unwrap();

    // Assert
    assert!(stdout.is_empty());
    let markdown = fs::read_to_string(&output).unwrap();
    assert!(markdown.starts_with("# FEDIMINT v0.8.0-beta.2 REGRESSION ANALYSIS"));
}

#[test]
fn quiet_analyze_only_writes_results() {
    // Arrange
    let ws = two_version_workspace();
    let mut args = ws.analyze_args();
    args.quiet = true;

    // Act
    let printed = ws.analyze_with(&args).unwrap();

    // Assert
    assert_eq!(printed, "");
    assert!(ws.results_file().is_file());
}

#[test]
fn missing_version_directories_are_skipped_with_a_warning() {
    // Arrange
    init_test_tracing();
    let ws = Workspace::new();
    ws.run("baseline", "test-run1")
        .cli_log(&["2024-01-01T10:00:00.000Z INFO \"joined\""]);
    let root = ws.root().display().to_string();

    // Act
    ws.analyze().unwrap();

    // Assert
    let results = ws.load_results();
    assert_eq!(results.len(), 1);
    assert!(results.contains("baseline"));

    let skipped: Vec<_> = captured_events()
        .into_iter()
        .filter(|e| e.level == Level::WARN)
        .filter(|e| e.field("dir").is_some_and(|d| d.starts_with(&root)))
        .filter_map(|e| e.field("version").map(str::to_string))
        .collect();
    assert_eq!(
        skipped,
        vec![
            "v0.8.0-beta.2",
            "v0.8.0-beta.2-with-n0-infra",
            "v0.8.0-beta.2-n0-only-infra",
        ]
    );
}

#[test]
fn empty_workspace_saves_empty_results() {
    // Arrange
    let ws = Workspace::new();

    // Act
    let summary = ws.analyze().unwrap();

    // Assert
    assert!(ws.load_results().is_empty());
    assert_eq!(fs::read_to_string(ws.results_file()).unwrap().trim(), "{}");
    assert!(!summary.contains("COMPARATIVE ANALYSIS"));
}

#[test]
fn report_fails_when_a_run_has_no_cli_log() {
    // Arrange
    let ws = Workspace::new();
    ws.run("baseline", "test-run1")
        .cli_log(&["2024-01-01T10:00:00.000Z INFO \"joined\""]);
    ws.run("baseline", "test-run2")
        .peer_log(&["2024-01-01T10:00:00.000Z INFO peer up"]);
    ws.analyze().unwrap();

    // Act
    let err = ws.report().unwrap_err();

    // Assert
    let message = format!("{err:#}");
    assert!(message.contains("has no CLI log analysis"), "got {message}");
    assert!(message.contains("test-run2"), "got {message}");
}

#[test]
fn report_without_results_file_fails() {
    // Arrange
    let ws = Workspace::new();

    // Act
    let err = ws.report().unwrap_err();

    // Assert
    assert!(!ws.results_file().exists());
    assert!(format!("{err:#}").contains("log_analysis_results.json"));
}

#[test]
fn zero_run_version_makes_summary_fail_after_results_are_saved() {
    // Arrange
    let ws = Workspace::new();
    fs::create_dir_all(ws.root().join("baseline")).unwrap();

    // Act
    let err = ws.analyze().unwrap_err();

    // Assert
    assert!(ws.results_file().is_file());
    assert!(format!("{err:#}").contains("denominator is zero"));
}
