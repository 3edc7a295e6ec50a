use crate::conf::defaults::CONFIG_FILE;
use crate::conf::{AnalyzerConfig, render_hcl};
use anyhow::{Context, Result, bail};
use std::fs;
use std::io::Write;
use std::path::Path;

pub fn init(path: &Path, out: &mut impl Write) -> Result<()> {
    if path.is_file() {
        bail!("{} exists and is not a directory", path.display());
    }

    let target = path.join(CONFIG_FILE);
    if target.exists() {
        bail!("{} already exists", target.display());
    }

    fs::create_dir_all(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    fs::write(&target, render_hcl(&AnalyzerConfig::default()))
        .with_context(|| format!("failed to create {}", target.display()))?;

    writeln!(out, "✔ Wrote {}", target.display())?;
    writeln!(out)?;
    writeln!(out, "Next steps:")?;
    writeln!(out, "  fedlog config check")?;
    writeln!(out, "  fedlog analyze")?;

    Ok(())
}
