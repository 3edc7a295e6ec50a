use crate::cli::WorkspaceArgs;
use serde::Serialize;
use std::io::Write;

pub fn dump(
    workspace: &WorkspaceArgs,
    yaml: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let cfg = workspace.load_config()?;

    // JSON unless YAML was asked for
    if yaml {
        dump_yaml(&cfg, out)?;
    } else {
        dump_json(&cfg, out)?;
    }

    Ok(())
}

fn dump_json<T: Serialize>(value: &T, out: &mut impl Write) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    writeln!(out, "{s}")?;
    Ok(())
}

fn dump_yaml<T: Serialize>(value: &T, out: &mut impl Write) -> anyhow::Result<()> {
    let s = serde_yaml::to_string(value)?;
    write!(out, "{s}")?;
    Ok(())
}
