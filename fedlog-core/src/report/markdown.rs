use crate::conf::defaults::BASELINE_LABEL;
use crate::conf::{AnalyzerConfig, VersionConfig};
use crate::report::{ReportError, count_delta, percent_change};
use crate::results::AnalysisResults;
use crate::scan::{TestRunAnalysis, VersionSummary};

/// Markdown regression report built from persisted results.
///
/// The success-rate column always reads `(100%)` after the run counts,
/// whatever the real rate is. The range column is `0.00` whenever min or max
/// is missing or zero.
pub fn render_markdown(
    results: &AnalysisResults,
    cfg: &AnalyzerConfig,
) -> Result<String, ReportError> {
    let present: Vec<_> = cfg
        .versions
        .iter()
        .filter_map(|v| results.get(&v.label).map(|a| (v, a)))
        .collect();

    let baseline = results
        .get(BASELINE_LABEL)
        .map(|a| &a.summary)
        .ok_or(ReportError::MissingBaseline)?;

    let mut out = String::new();

    out.push_str(&format!("# {}\n\n", cfg.report_title));

    //-------------------------------------------------------------------------
    // Performance statistics
    //-------------------------------------------------------------------------
    out.push_str("## Performance Statistics Summary\n\n");
    out.push_str(
        "| Version | Avg (s) | Median (s) | Min (s) | Max (s) | Range (s) | Success Rate |\n",
    );
    out.push_str(
        "|---------|---------|------------|---------|---------|-----------|--------------|\n",
    );

    for (version, analysis) in &present {
        let s = &analysis.summary;
        let range = match (s.min_duration, s.max_duration) {
            (Some(min), Some(max)) if min != 0.0 && max != 0.0 => max - min,
            _ => 0.0,
        };

        out.push_str(&format!(
            "| {} | {} | {} | {} | {} | {range:.2} | {}/{} (100%) |\n",
            version.display_name,
            seconds(s.avg_duration),
            seconds(s.median_duration),
            seconds(s.min_duration),
            seconds(s.max_duration),
            s.successful_runs,
            s.total_runs,
        ));
    }

    //-------------------------------------------------------------------------
    // Relative change vs baseline
    //-------------------------------------------------------------------------
    out.push_str("\n## Performance Comparison (vs Baseline)\n\n");
    out.push_str("| Version | Avg Change | Median Change | Min Change | Max Change |\n");
    out.push_str("|---------|------------|---------------|------------|------------|\n");

    for (version, analysis) in present.iter().filter(|(v, _)| !v.is_baseline()) {
        let s = &analysis.summary;
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            version.display_name,
            change(version, "average duration change", baseline.avg_duration, s.avg_duration)?,
            change(
                version,
                "median duration change",
                baseline.median_duration,
                s.median_duration
            )?,
            change(version, "minimum duration change", baseline.min_duration, s.min_duration)?,
            change(version, "maximum duration change", baseline.max_duration, s.max_duration)?,
        ));
    }

    //-------------------------------------------------------------------------
    // Errors and warnings
    //-------------------------------------------------------------------------
    out.push_str("\n## Error and Warning Analysis\n\n");
    out.push_str(
        "| Version | CLI Errors | Total Warnings | Errors vs Baseline | Warnings vs Baseline |\n",
    );
    out.push_str(
        "|---------|------------|----------------|--------------------|--------------------|\n",
    );

    for (version, analysis) in &present {
        out.push_str(&error_row(version, &analysis.summary, baseline));
    }

    //-------------------------------------------------------------------------
    // Per-run details
    //-------------------------------------------------------------------------
    out.push_str("\n## Individual Test Run Details\n\n");

    for (version, analysis) in &present {
        out.push_str(&format!("### {}\n\n", version.display_name));
        out.push_str(
            "| Run | Duration (s) | Success | CLI Errors | CLI Warnings | Notable Issues |\n",
        );
        out.push_str(
            "|-----|--------------|---------|------------|--------------|----------------|\n",
        );

        for (i, run) in analysis.test_runs.iter().enumerate() {
            out.push_str(&run_row(&version.label, i + 1, run)?);
        }

        out.push('\n');
    }

    Ok(out)
}

fn seconds(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| format!("{v:.2}"))
}

/// Signed percentage change, or `N/A` when either side has no statistic.
fn change(
    version: &VersionConfig,
    quantity: &'static str,
    base: Option<f64>,
    value: Option<f64>,
) -> Result<String, ReportError> {
    let (Some(base), Some(value)) = (base, value) else {
        return Ok("N/A".to_string());
    };

    let pct = percent_change(&version.label, quantity, base, value)?;
    Ok(format!("{pct:+.1}%"))
}

fn error_row(
    version: &VersionConfig,
    summary: &VersionSummary,
    baseline: &VersionSummary,
) -> String {
    let (error_diff, warning_diff) = if version.is_baseline() {
        ("-".to_string(), "-".to_string())
    } else {
        (
            format!("{:+}", count_delta(baseline.total_errors, summary.total_errors)),
            format!("{:+}", count_delta(baseline.total_warnings, summary.total_warnings)),
        )
    };

    format!(
        "| {} | {} | {} | {error_diff} | {warning_diff} |\n",
        version.display_name, summary.total_errors, summary.total_warnings
    )
}

fn run_row(label: &str, index: usize, run: &TestRunAnalysis) -> Result<String, ReportError> {
    let cli = run
        .cli_analysis
        .as_ref()
        .ok_or_else(|| ReportError::MissingCliAnalysis {
            version: label.to_string(),
            run_dir: run.run_dir.clone(),
        })?;

    let success = if cli.success { "✅" } else { "❌" };

    let counts = cli.issue_counts();
    let issues = if counts.is_empty() {
        "None".to_string()
    } else {
        counts
            .iter()
            .map(|(issue, count)| format!("{issue} ({count})"))
            .collect::<Vec<_>>()
            .join(", ")
    };

    Ok(format!(
        "| {index} | {} | {success} | {} | {} | {issues} |\n",
        seconds(cli.duration_seconds),
        cli.error_count,
        cli.warn_count
    ))
}
