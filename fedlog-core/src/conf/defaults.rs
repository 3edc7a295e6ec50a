/// Config file picked up from the working directory when `--config` is not given.
pub const CONFIG_FILE: &str = "fedlog.hcl";

pub const RESULTS_FILE: &str = "log_analysis_results.json";

pub const REPORT_TITLE: &str = "FEDIMINT v0.8.0-beta.2 REGRESSION ANALYSIS - DETAILED REPORT";

/// The reference version every other version is compared against.
pub const BASELINE_LABEL: &str = "baseline";

pub const RUN_DIR_PREFIX: &str = "test-run";
pub const CLI_LOG_GLOB: &str = "*fedimint-cli*.log";
pub const PEER_LOG_GLOB: &str = "*fedimintd-peer0*.log";

/// A CLI log line carrying this substring means the client joined the federation.
pub const SUCCESS_MARKER: &str = "\"joined\"";

/// label -> display name, in report order.
pub const VERSIONS: &[(&str, &str)] = &[
    ("baseline", "v0.7.2 (baseline)"),
    ("v0.8.0-beta.2", "v0.8.0-beta.2 (self-hosted)"),
    ("v0.8.0-beta.2-with-n0-infra", "v0.8.0-beta.2 (mixed)"),
    ("v0.8.0-beta.2-n0-only-infra", "v0.8.0-beta.2 (n0-only)"),
];

/// phrase (matched case-insensitively) -> issue label.
pub const KNOWN_ISSUES: &[(&str, &str)] = &[
    ("disco box", "Disco box error"),
    ("dns.iroh.link", "DNS resolution failure"),
    ("pkarr publish error", "PKarr protocol error"),
    ("failed to open disco box", "Failed to open disco box"),
];
