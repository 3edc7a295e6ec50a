use crate::cli::WorkspaceArgs;
use crate::report::render_console;
use crate::results::save_results;
use crate::scan::Analyzer;
use anyhow::{Context, Result};
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub workspace: WorkspaceArgs,

    /// Results file to write (relative to --dir)
    #[arg(long)]
    pub results: Option<PathBuf>,

    /// Only write the results file, skip the console summary
    #[arg(long, short)]
    pub quiet: bool,
}

/// Scan every configured version, persist the results, then print the
/// console summary to `out`.
///
/// Results are saved before the summary is rendered, so a summary that
/// cannot be computed still leaves the results file behind.
pub fn analyze(args: &AnalyzeArgs, out: &mut impl Write) -> Result<()> {
    let cfg = args.workspace.load_config()?;
    let results_path = args.workspace.results_path(&cfg, args.results.as_deref());

    let results = Analyzer::new(&cfg)
        .analyze_versions(&args.workspace.dir, &cfg.versions)
        .context("analysis failed")?;

    if results.is_empty() {
        tracing::warn!(dir = %args.workspace.dir.display(), "no version directories found");
    }

    save_results(&results_path, &results)?;

    if args.quiet {
        return Ok(());
    }

    let summary = render_console(&results, &cfg).context("failed to render summary")?;
    out.write_all(summary.as_bytes())?;
    out.flush()?;

    Ok(())
}
