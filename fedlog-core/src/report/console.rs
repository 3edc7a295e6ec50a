use crate::conf::AnalyzerConfig;
use crate::conf::defaults::BASELINE_LABEL;
use crate::report::{ReportError, count_delta, percent_change, success_rate};
use crate::results::AnalysisResults;
use crate::scan::VersionSummary;

const BANNER: &str = "FEDIMINT LOG ANALYSIS SUMMARY";

/// Plain-text summary of every analyzed version followed by deltas against
/// the baseline.
pub fn render_console(
    results: &AnalysisResults,
    cfg: &AnalyzerConfig,
) -> Result<String, ReportError> {
    let mut out = String::new();

    out.push_str(&format!("\n{}\n{BANNER}\n{}\n", "=".repeat(60), "=".repeat(60)));

    for version in &cfg.versions {
        let Some(analysis) = results.get(&version.label) else {
            continue;
        };
        render_version(&mut out, &version.label, &analysis.summary)?;
    }

    let Some(baseline) = results.get(BASELINE_LABEL) else {
        return Ok(out);
    };
    let baseline = &baseline.summary;

    out.push_str(&format!(
        "\nCOMPARATIVE ANALYSIS (vs baseline)\n{}\n",
        "-".repeat(40)
    ));

    for version in cfg.compared_versions() {
        let Some(analysis) = results.get(&version.label) else {
            continue;
        };
        render_comparison(&mut out, &version.label, baseline, &analysis.summary)?;
    }

    Ok(out)
}

fn render_version(
    out: &mut String,
    label: &str,
    summary: &VersionSummary,
) -> Result<(), ReportError> {
    let rate = success_rate(label, summary)?;

    out.push_str(&format!("\n{}\n{}\n", label.to_uppercase(), "-".repeat(40)));
    out.push_str(&format!("Total runs: {}\n", summary.total_runs));
    out.push_str(&format!("Successful runs: {}\n", summary.successful_runs));
    out.push_str(&format!(
        "Success rate: {}/{} ({rate:.1}%)\n",
        summary.successful_runs, summary.total_runs
    ));

    match (
        summary.avg_duration,
        summary.median_duration,
        summary.min_duration,
        summary.max_duration,
    ) {
        (Some(avg), Some(median), Some(min), Some(max)) => {
            out.push_str("Join duration statistics:\n");
            out.push_str(&format!("  Average: {avg:.2}s\n"));
            out.push_str(&format!("  Median: {median:.2}s\n"));
            out.push_str(&format!("  Min: {min:.2}s\n"));
            out.push_str(&format!("  Max: {max:.2}s\n"));
        }
        _ => out.push_str("Join duration: N/A\n"),
    }

    out.push_str(&format!("Total errors: {}\n", summary.total_errors));
    out.push_str(&format!("Total warnings: {}\n", summary.total_warnings));

    Ok(())
}

fn render_comparison(
    out: &mut String,
    label: &str,
    baseline: &VersionSummary,
    summary: &VersionSummary,
) -> Result<(), ReportError> {
    out.push_str(&format!("\n{label}:\n"));

    if let (Some(base_avg), Some(avg)) = (baseline.avg_duration, summary.avg_duration) {
        let pct = percent_change(BASELINE_LABEL, "average duration change", base_avg, avg)?;
        out.push_str(&format!(
            "  Duration change: {:+.2}s ({pct:+.1}%)\n",
            avg - base_avg
        ));
    }

    out.push_str(&format!(
        "  Error change: {:+}\n",
        count_delta(baseline.total_errors, summary.total_errors)
    ));
    out.push_str(&format!(
        "  Warning change: {:+}\n",
        count_delta(baseline.total_warnings, summary.total_warnings)
    ));

    // percentage points, not a relative change
    let rate_delta = success_rate(label, summary)? - success_rate(BASELINE_LABEL, baseline)?;
    out.push_str(&format!("  Success rate change: {rate_delta:+.1}%\n"));

    Ok(())
}
