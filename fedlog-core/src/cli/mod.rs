pub mod analyze;
pub mod config;
pub mod report;

use crate::conf::{AnalyzerConfig, load_config};
use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

/// Where the harness output lives and which config applies to it.
#[derive(Args, Debug, Clone)]
pub struct WorkspaceArgs {
    /// Directory holding one subdirectory per version
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Config file (defaults to <dir>/fedlog.hcl when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl WorkspaceArgs {
    pub fn load_config(&self) -> Result<AnalyzerConfig> {
        load_config(&self.dir, self.config.as_deref())
            .with_context(|| format!("failed to load config for {}", self.dir.display()))
    }

    /// Results path from `--results`, else from config, relative to `--dir`.
    pub fn results_path(&self, cfg: &AnalyzerConfig, explicit: Option<&Path>) -> PathBuf {
        match explicit {
            Some(path) => self.dir.join(path),
            None => cfg.results_path(&self.dir),
        }
    }
}
