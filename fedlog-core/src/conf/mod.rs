//! Analyzer configuration.
//!
//! Everything the scanner and the reports treat as a constant lives here: the
//! version table (label, directory, display name), the known-issue phrase
//! table, the log file globs and the success marker. The compiled-in tables in
//! [`defaults`] are used unless a `fedlog.hcl` file overrides them.

pub mod defaults;
mod error;
mod loader;
mod render;
mod types;
mod validation;

pub use error::ConfigError;
pub use loader::{load_config, parse_config, resolve_config_path};
pub use render::render_hcl;
pub use types::{AnalyzerConfig, KnownIssue, VersionConfig};
pub use validation::{Severity, ValidationIssue, ValidationReport, validate_config};
