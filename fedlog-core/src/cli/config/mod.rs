mod check;
mod dump;
mod init;

pub use check::*;
pub use dump::*;
pub use init::*;

use crate::cli::WorkspaceArgs;
use clap::Subcommand;
use std::io::Write;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate configuration and exit
    Check {
        #[command(flatten)]
        workspace: WorkspaceArgs,

        /// Print issues without colors
        #[arg(long)]
        plain: bool,
    },

    /// Print the effective configuration
    Dump {
        #[command(flatten)]
        workspace: WorkspaceArgs,

        /// Output as JSON
        #[arg(long, conflicts_with = "yaml")]
        json: bool,

        /// Output as YAML
        #[arg(long)]
        yaml: bool,
    },

    /// Write a fedlog.hcl with the built-in defaults
    Init {
        /// Directory to write fedlog.hcl into
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

pub fn run(cmd: ConfigCmd, out: &mut impl Write) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { workspace, plain } => check(&workspace, plain, out),
        ConfigCmd::Dump { workspace, yaml, .. } => dump(&workspace, yaml, out),
        ConfigCmd::Init { path } => init(&path, out),
    }
}
