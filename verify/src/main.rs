mod cli;
mod judge;
mod outcome;
mod report;
mod run;
mod target;
mod transcript;

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "verify",
    version,
    about = "Check a harness binary's transcript against its exit code"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a target and check transcript consistency.
    Check {
        /// Target file (TOML). Omit to pass the command after `--`.
        target: Option<PathBuf>,
        #[arg(long)]
        runs: Option<u32>,
        #[arg(long)]
        timeout_secs: Option<u64>,
        /// Write the JSON report here.
        #[arg(long)]
        report: Option<PathBuf>,
        /// Command to run when no target file is given.
        #[arg(last = true)]
        command: Vec<String>,
    },
}

fn main() {
    runner::logging::init("warn");
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(outcome::Outcome::Error.exit_code());
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Check {
            target,
            runs,
            timeout_secs,
            report,
            command,
        } => {
            if target.is_some() && !command.is_empty() {
                bail!("give either a target file or a command after `--`, not both");
            }
            let target = cli::resolve_target(target.as_deref(), command, runs, timeout_secs)?;
            let outcome = cli::check_target(&target, report.as_deref())?;
            Ok(outcome.exit_code())
        }
    }
}
