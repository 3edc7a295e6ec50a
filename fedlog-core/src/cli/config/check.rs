use crate::cli::WorkspaceArgs;
use crate::conf::{ConfigError, load_config, resolve_config_path};
use anyhow::bail;
use miette::Report;
use std::io::Write;

pub fn check(workspace: &WorkspaceArgs, plain: bool, out: &mut impl Write) -> anyhow::Result<()> {
    match load_config(&workspace.dir, workspace.config.as_deref()) {
        Ok(cfg) => {
            match resolve_config_path(&workspace.dir, workspace.config.as_deref()) {
                Some(path) => writeln!(out, "✔ Config loaded from {}", path.display())?,
                None => writeln!(out, "✔ No config file, using built-in defaults")?,
            }
            writeln!(out, "✔ {} versions", cfg.versions.len())?;
            writeln!(out, "✔ {} known issues", cfg.known_issues.len())?;
            writeln!(out, "✔ results file: {}", cfg.results_file.display())?;
            Ok(())
        }
        Err(err) => {
            print_config_error(err, plain);
            bail!("configuration is invalid");
        }
    }
}

fn print_config_error(err: ConfigError, plain: bool) {
    if let ConfigError::Validation { report } = &err {
        if plain {
            eprint!("{}", report.render_plain());
        } else {
            eprint!("{}", report.render_pretty());
        }
        return;
    }

    if plain {
        eprintln!("{err}");
    } else {
        eprintln!();
        eprintln!("{:?}", Report::new(err));
    }
}
