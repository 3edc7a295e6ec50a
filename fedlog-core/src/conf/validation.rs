use crate::conf::AnalyzerConfig;
use crate::conf::defaults::BASELINE_LABEL;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub message: String,
    /// Config path of the offending value, e.g. `versions[2].label`.
    pub field: String,
    pub help: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_violations(&self) -> bool {
        !self.errors.is_empty() || !self.warnings.is_empty()
    }

    pub(crate) fn error(&mut self, field: impl Into<String>, message: String, help: Option<&str>) {
        self.errors.push(ValidationIssue {
            severity: Severity::Error,
            message,
            field: field.into(),
            help: help.map(str::to_string),
        });
    }

    pub(crate) fn warning(
        &mut self,
        field: impl Into<String>,
        message: String,
        help: Option<&str>,
    ) {
        self.warnings.push(ValidationIssue {
            severity: Severity::Warning,
            message,
            field: field.into(),
            help: help.map(str::to_string),
        });
    }

    pub fn render_plain(&self) -> String {
        let mut out = String::new();

        for issue in self.errors.iter().chain(self.warnings.iter()) {
            let severity = match issue.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };

            out.push_str(&format!("{}: {}: {}\n", issue.field, severity, issue.message));

            if let Some(help) = &issue.help {
                out.push_str(&format!("  help: {help}\n"));
            }
        }

        out
    }

    pub fn render_pretty(&self) -> String {
        let mut out = String::new();

        if self.has_violations() {
            out.push_str(&format!(
                "configuration validation failed ({} errors, {} warnings)\n\n",
                self.errors.len(),
                self.warnings.len()
            ));
        }

        for issue in self.errors.iter().chain(self.warnings.iter()) {
            let severity = match issue.severity {
                Severity::Error => format!("{}", "error".red().bold()),
                Severity::Warning => format!("{}", "warning".yellow().bold()),
            };

            out.push_str(&format!(
                "  {severity} {}: {}\n",
                issue.field.dimmed(),
                issue.message
            ));

            if let Some(help) = &issue.help {
                out.push_str(&format!("    {} {help}\n", "help:".cyan()));
            }
        }

        out
    }
}

pub fn validate_config(cfg: &AnalyzerConfig) -> ValidationReport {
    let mut report = ValidationReport::default();

    validate_scan_settings(cfg, &mut report);
    validate_versions(cfg, &mut report);
    validate_known_issues(cfg, &mut report);

    report
}

fn validate_scan_settings(cfg: &AnalyzerConfig, report: &mut ValidationReport) {
    if cfg.run_dir_prefix.is_empty() {
        report.error(
            "run_dir_prefix",
            "run directory prefix must not be empty".to_string(),
            Some("the default prefix is \"test-run\""),
        );
    }

    if cfg.success_marker.is_empty() {
        report.error(
            "success_marker",
            "success marker must not be empty".to_string(),
            None,
        );
    }

    if cfg.results_file.as_os_str().is_empty() {
        report.error(
            "results_file",
            "results file path must not be empty".to_string(),
            None,
        );
    }

    for (field, pattern) in [
        ("cli_log_glob", &cfg.cli_log_glob),
        ("peer_log_glob", &cfg.peer_log_glob),
    ] {
        if pattern.is_empty() {
            report.error(field, "log glob must not be empty".to_string(), None);
            continue;
        }

        if let Err(e) = glob::Pattern::new(pattern) {
            report.error(field, format!("invalid glob pattern '{pattern}': {e}"), None);
        }

        if pattern.contains('/') {
            report.error(
                field,
                format!("log glob '{pattern}' must match file names, not paths"),
                Some("log files are looked up directly inside each run directory"),
            );
        }
    }
}

fn validate_versions(cfg: &AnalyzerConfig, report: &mut ValidationReport) {
    if cfg.versions.is_empty() {
        report.error(
            "versions",
            "at least one version must be configured".to_string(),
            None,
        );
        return;
    }

    let mut seen = HashSet::new();
    let mut baselines = 0;

    for (i, version) in cfg.versions.iter().enumerate() {
        if version.label.is_empty() {
            report.error(
                format!("versions[{i}].label"),
                "version label must not be empty".to_string(),
                None,
            );
        } else if !seen.insert(version.label.as_str()) {
            report.error(
                format!("versions[{i}].label"),
                format!("duplicate version label '{}'", version.label),
                None,
            );
        }

        if version.is_baseline() {
            baselines += 1;
            if i != 0 {
                report.error(
                    format!("versions[{i}].label"),
                    format!("'{BASELINE_LABEL}' must be the first configured version"),
                    Some("reports list the baseline first and compare every other version to it"),
                );
            }
        }

        if version.dir_name().contains(['/', '\\']) {
            report.error(
                format!("versions[{i}].dir"),
                format!(
                    "version directory '{}' must be a single path component",
                    version.dir_name()
                ),
                None,
            );
        }

        if version.display_name.is_empty() {
            report.warning(
                format!("versions[{i}].display_name"),
                format!("version '{}' has an empty display name", version.label),
                None,
            );
        }
    }

    if baselines == 0 {
        report.error(
            "versions",
            format!("no '{BASELINE_LABEL}' version configured"),
            Some("add a version with label = \"baseline\" as the first entry"),
        );
    }
}

fn validate_known_issues(cfg: &AnalyzerConfig, report: &mut ValidationReport) {
    let mut seen = HashSet::new();

    for (i, issue) in cfg.known_issues.iter().enumerate() {
        if issue.phrase.is_empty() {
            report.error(
                format!("known_issues[{i}].phrase"),
                "known issue phrase must not be empty".to_string(),
                None,
            );
            continue;
        }

        if issue.label.is_empty() {
            report.error(
                format!("known_issues[{i}].label"),
                format!("known issue '{}' has no label", issue.phrase),
                None,
            );
        }

        if issue.phrase.chars().any(char::is_uppercase) {
            report.warning(
                format!("known_issues[{i}].phrase"),
                format!(
                    "phrase '{}' contains upper-case characters; phrases match case-insensitively",
                    issue.phrase
                ),
                None,
            );
        }

        if !seen.insert(issue.phrase.to_lowercase()) {
            report.warning(
                format!("known_issues[{i}].phrase"),
                format!(
                    "phrase '{}' is listed more than once and will be reported twice per line",
                    issue.phrase
                ),
                None,
            );
        }
    }
}
