use fedlog_core::cli::WorkspaceArgs;
use fedlog_core::cli::analyze::{AnalyzeArgs, analyze};
use fedlog_core::cli::report::{ReportArgs, report};
use fedlog_core::results::{AnalysisResults, load_results};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary harness output tree: `<root>/<version>/<run>/*.log`.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Create (or reuse) a run directory under a version directory.
    pub fn run(&self, version: &str, run: &str) -> RunDir {
        let path = self.root().join(version).join(run);
        fs::create_dir_all(&path).expect("failed to create run dir");
        RunDir { path }
    }

    pub fn write_config(&self, hcl: &str) -> PathBuf {
        let path = self.root().join("fedlog.hcl");
        fs::write(&path, hcl).expect("failed to write config");
        path
    }

    pub fn workspace_args(&self) -> WorkspaceArgs {
        WorkspaceArgs {
            dir: self.root().to_path_buf(),
            config: None,
        }
    }

    pub fn analyze_args(&self) -> AnalyzeArgs {
        AnalyzeArgs {
            workspace: self.workspace_args(),
            results: None,
            quiet: false,
        }
    }

    pub fn report_args(&self) -> ReportArgs {
        ReportArgs {
            workspace: self.workspace_args(),
            results: None,
            output: None,
        }
    }

    /// Run `analyze` and return what it printed.
    pub fn analyze(&self) -> anyhow::Result<String> {
        self.analyze_with(&self.analyze_args())
    }

    pub fn analyze_with(&self, args: &AnalyzeArgs) -> anyhow::Result<String> {
        let mut out = Vec::new();
        analyze(args, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    /// Run `report` and return the markdown it printed.
    pub fn report(&self) -> anyhow::Result<String> {
        let mut out = Vec::new();
        report(&self.report_args(), &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    pub fn results_file(&self) -> PathBuf {
        self.root().join("log_analysis_results.json")
    }

    pub fn load_results(&self) -> AnalysisResults {
        load_results(&self.results_file()).expect("failed to load results")
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

pub struct RunDir {
    pub path: PathBuf,
}

impl RunDir {
    pub fn cli_log(&self, lines: &[&str]) -> &Self {
        self.log("fedimint-cli.log", lines)
    }

    pub fn peer_log(&self, lines: &[&str]) -> &Self {
        self.log("fedimintd-peer0.log", lines)
    }

    pub fn log(&self, name: &str, lines: &[&str]) -> &Self {
        let mut text = lines.join("\n");
        text.push('\n');
        fs::write(self.path.join(name), text).expect("failed to write log");
        self
    }
}
