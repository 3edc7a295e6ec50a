use crate::scan::ScanError;
use glob::{Pattern, glob};
use std::fs;
use std::path::{Path, PathBuf};

/// Discovers files directly inside `dir` whose name matches `file_pattern`.
///
/// Results are sorted, so when several files match, callers taking the first
/// entry get the lexicographically smallest path on every platform. The
/// directory part is escaped: a run directory named `test-run[1]` is matched
/// literally rather than as a character class.
///
/// # Errors
///
/// Returns `ScanError::Glob` if `file_pattern` is malformed.
pub fn discover_files(dir: &Path, file_pattern: &str) -> Result<Vec<PathBuf>, ScanError> {
    let pattern = resolve_glob(dir, file_pattern);
    let mut paths: Vec<_> = glob(&pattern)
        .map_err(|e| ScanError::Glob {
            pattern: pattern.clone(),
            source: e,
        })?
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .collect();

    paths.sort();
    Ok(paths)
}

/// Joins an escaped directory path and a file-name pattern.
pub fn resolve_glob(dir: &Path, file_pattern: &str) -> String {
    let escaped_dir = Pattern::escape(&dir.to_string_lossy());
    Path::new(&escaped_dir)
        .join(file_pattern)
        .to_string_lossy()
        .into_owned()
}

/// Immediate subdirectories of `version_dir` whose name starts with `prefix`,
/// sorted by name as plain strings (`test-run10` sorts before `test-run2`).
///
/// # Errors
///
/// Returns `ScanError::ReadDir` if `version_dir` cannot be listed.
pub fn list_run_dirs(version_dir: &Path, prefix: &str) -> Result<Vec<PathBuf>, ScanError> {
    let entries = fs::read_dir(version_dir).map_err(|e| ScanError::read_dir(version_dir, e))?;

    let mut runs: Vec<(String, PathBuf)> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| {
            let name = entry.file_name().to_str()?.to_string();
            name.starts_with(prefix).then(|| (name, entry.path()))
        })
        .collect();

    runs.sort_by(|(a, _), (b, _)| a.cmp(b));
    Ok(runs.into_iter().map(|(_, path)| path).collect())
}
