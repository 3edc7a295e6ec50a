use crate::cli::WorkspaceArgs;
use crate::report::render_markdown;
use crate::results::load_results;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub workspace: WorkspaceArgs,

    /// Results file to read (relative to --dir)
    #[arg(long)]
    pub results: Option<PathBuf>,

    /// Write the report to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Render the markdown report from previously saved results.
pub fn report(args: &ReportArgs, out: &mut impl Write) -> Result<()> {
    let cfg = args.workspace.load_config()?;
    let results_path = args.workspace.results_path(&cfg, args.results.as_deref());

    let results = load_results(&results_path)?;
    let markdown = render_markdown(&results, &cfg).context("failed to render report")?;

    match &args.output {
        Some(path) => {
            fs::write(path, &markdown)
                .with_context(|| format!("failed to write report {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote report");
        }
        None => {
            out.write_all(markdown.as_bytes())?;
            out.flush()?;
        }
    }

    Ok(())
}
