use crate::results::{AnalysisResults, ResultsError};
use std::fs;
use std::path::Path;

/// Write the results as pretty-printed JSON, replacing any previous file.
pub fn save_results(path: &Path, results: &AnalysisResults) -> Result<(), ResultsError> {
    let mut json = serde_json::to_string_pretty(results)?;
    json.push('\n');

    fs::write(path, json).map_err(|source| ResultsError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), versions = results.len(), "saved analysis results");
    Ok(())
}

pub fn load_results(path: &Path) -> Result<AnalysisResults, ResultsError> {
    let json = fs::read_to_string(path).map_err(|source| ResultsError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&json).map_err(|source| ResultsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
