use crate::conf::defaults;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Where `analyze` persists results and `report` reads them from.
    /// Relative paths resolve against the working directory.
    pub results_file: PathBuf,
    pub report_title: String,
    pub run_dir_prefix: String,
    pub cli_log_glob: String,
    pub peer_log_glob: String,
    pub success_marker: String,
    pub versions: Vec<VersionConfig>,
    pub known_issues: Vec<KnownIssue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VersionConfig {
    pub label: String,
    /// Directory name under the working directory; defaults to the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KnownIssue {
    pub phrase: String,
    pub label: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            results_file: PathBuf::from(defaults::RESULTS_FILE),
            report_title: defaults::REPORT_TITLE.to_string(),
            run_dir_prefix: defaults::RUN_DIR_PREFIX.to_string(),
            cli_log_glob: defaults::CLI_LOG_GLOB.to_string(),
            peer_log_glob: defaults::PEER_LOG_GLOB.to_string(),
            success_marker: defaults::SUCCESS_MARKER.to_string(),
            versions: defaults::VERSIONS
                .iter()
                .map(|(label, display_name)| VersionConfig {
                    label: label.to_string(),
                    dir: None,
                    display_name: display_name.to_string(),
                })
                .collect(),
            known_issues: defaults::KNOWN_ISSUES
                .iter()
                .map(|(phrase, label)| KnownIssue {
                    phrase: phrase.to_string(),
                    label: label.to_string(),
                })
                .collect(),
        }
    }
}

impl AnalyzerConfig {
    /// Every configured version except the baseline, in report order.
    pub fn compared_versions(&self) -> impl Iterator<Item = &VersionConfig> {
        self.versions.iter().filter(|v| !v.is_baseline())
    }

    pub fn results_path(&self, root: &Path) -> PathBuf {
        root.join(&self.results_file)
    }
}

impl VersionConfig {
    pub fn dir_name(&self) -> &str {
        self.dir.as_deref().unwrap_or(&self.label)
    }

    pub fn is_baseline(&self) -> bool {
        self.label == defaults::BASELINE_LABEL
    }
}
