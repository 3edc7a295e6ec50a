use clap::{Parser, Subcommand};
use fedlog_core::cli;
use fedlog_core::cli::analyze::{AnalyzeArgs, analyze};
use fedlog_core::cli::config::ConfigCmd;
use fedlog_core::cli::report::{ReportArgs, report};
use fedlog_core::logging::{LogFormat, default_log_format, init_logging};
use std::io;

#[derive(Parser, Debug)]
#[command(
    name = "fedlog",
    version,
    about = "fedlog: regression analysis for federation test-harness logs"
)]
struct Cli {
    /// Diagnostic log format on stderr (default depends on whether stderr is a terminal)
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scan all version directories, save results and print a summary
    Analyze(AnalyzeArgs),

    /// Print a markdown report from saved results
    Report(ReportArgs),

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.log_format.unwrap_or_else(default_log_format));

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Command::Analyze(args) => analyze(&args, &mut out),
        Command::Report(args) => report(&args, &mut out),
        Command::Config { cmd } => cli::config::run(cmd, &mut out),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
