use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("cannot compute {quantity} for '{version}': denominator is zero")]
    ZeroDenominator {
        version: String,
        quantity: &'static str,
    },

    #[error("no 'baseline' entry in the analysis results")]
    MissingBaseline,

    #[error("run {run_dir} of '{version}' has no CLI log analysis")]
    MissingCliAnalysis { version: String, run_dir: PathBuf },
}
