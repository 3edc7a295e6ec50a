use crate::report::ReportError;
use crate::scan::VersionSummary;

/// Successful runs as a percentage of all runs.
pub fn success_rate(version: &str, summary: &VersionSummary) -> Result<f64, ReportError> {
    if summary.total_runs == 0 {
        return Err(ReportError::ZeroDenominator {
            version: version.to_string(),
            quantity: "success rate",
        });
    }

    Ok(summary.successful_runs as f64 / summary.total_runs as f64 * 100.0)
}

/// Relative change of `value` against `base`, in percent.
pub fn percent_change(
    version: &str,
    quantity: &'static str,
    base: f64,
    value: f64,
) -> Result<f64, ReportError> {
    if base == 0.0 {
        return Err(ReportError::ZeroDenominator {
            version: version.to_string(),
            quantity,
        });
    }

    Ok((value - base) / base * 100.0)
}

/// Signed difference `value - base`. Widened so any pair of counts fits.
pub fn count_delta(base: u64, value: u64) -> i128 {
    i128::from(value) - i128::from(base)
}
