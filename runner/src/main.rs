//! Hosted runner for the arithmetic conformance harness.
//!
//! `runner run` prints the transcript on stdout and exits with the number of
//! failed checks. `runner list` prints the numbered case list without running
//! anything.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use harness::Suite;
use harness::scenarios::{case_count, case_names};
use runner::exit_codes;
use runner::io::config::{DEFAULT_CONFIG_PATH, RunnerConfig, SuiteChoice, load_config};
use runner::io::stdout::HostRuntime;
use runner::logging;
use serde::Serialize;
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "runner",
    version,
    about = "Integer-arithmetic conformance harness (hosted)"
)]
struct Cli {
    /// Config file; a missing file means defaults.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run every case; exit code is the failure count.
    Run {
        /// Override the suite from the config file.
        #[arg(long, value_enum)]
        suite: Option<SuiteChoice>,
    },
    /// Print the numbered case list.
    List {
        #[arg(long, value_enum)]
        suite: Option<SuiteChoice>,
        /// Emit JSON instead of tab-separated lines.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct ListedCase {
    number: u32,
    name: &'static str,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let cfg = load_config(&cli.config).context("load runner config")?;
    logging::init(&cfg.log_filter);
    debug!(config = %cli.config.display(), ?cfg, "config loaded");

    match cli.command {
        Command::Run { suite } => cmd_run(resolve_suite(&cfg, suite)),
        Command::List { suite, json } => cmd_list(resolve_suite(&cfg, suite), json),
    }
}

fn resolve_suite(cfg: &RunnerConfig, cli_choice: Option<SuiteChoice>) -> Suite {
    cli_choice.unwrap_or(cfg.suite).into()
}

fn cmd_run(suite: Suite) -> Result<()> {
    info!(?suite, cases = case_count(suite), "running suite");
    let mut rt = HostRuntime::stdout();
    harness::run(&mut rt, suite)
}

fn cmd_list(suite: Suite, json: bool) -> Result<()> {
    if json {
        let cases: Vec<ListedCase> = case_names(suite)
            .map(|(number, name)| ListedCase { number, name })
            .collect();
        let payload = serde_json::to_string_pretty(&cases).context("serialize case list")?;
        println!("{payload}");
    } else {
        for (number, name) in case_names(suite) {
            println!("{number}\t{name}");
        }
    }
    Ok(())
}
