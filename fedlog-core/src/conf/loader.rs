use crate::conf::defaults::CONFIG_FILE;
use crate::conf::{AnalyzerConfig, ConfigError, validate_config};
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve which config file applies to a working directory.
///
/// An explicit path always wins. Otherwise `fedlog.hcl` in `root` is used if
/// it exists, and `None` means the compiled-in defaults apply.
pub fn resolve_config_path(root: &Path, explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let candidate = root.join(CONFIG_FILE);
    candidate.is_file().then_some(candidate)
}

/// Load and validate the configuration for a working directory.
///
/// Warnings are logged and do not fail the load; any validation error does.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<AnalyzerConfig, ConfigError> {
    let Some(path) = resolve_config_path(root, explicit) else {
        tracing::debug!("no config file found, using built-in defaults");
        return Ok(AnalyzerConfig::default());
    };

    //--------------------------------------------------------------------------
    // Hard fail: IO and parsing
    //--------------------------------------------------------------------------
    let source = fs::read_to_string(&path).map_err(|e| ConfigError::read_file(&path, e))?;
    let cfg = parse_config(&path, &source)?;

    //--------------------------------------------------------------------------
    // Semantic validation (aggregate all problems)
    //--------------------------------------------------------------------------
    let report = validate_config(&cfg);
    if report.has_errors() {
        return Err(ConfigError::Validation { report });
    }

    for warning in &report.warnings {
        tracing::warn!(field = %warning.field, "{}", warning.message);
    }

    tracing::debug!(path = %path.display(), "loaded config");
    Ok(cfg)
}

/// Parse HCL config text. Attributes left out keep their default values.
pub fn parse_config(path: &Path, source: &str) -> Result<AnalyzerConfig, ConfigError> {
    hcl::from_str(source).map_err(|e| ConfigError::parse(path, e))
}
