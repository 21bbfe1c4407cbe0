//! CLI command implementations.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::outcome::Outcome;
use crate::report::write_report;
use crate::run::verify_target;
use crate::target::{Target, TargetFile};

/// Verify a target and print the summary. Returns the verdict.
pub fn check_target(target: &Target, report_path: Option<&Path>) -> Result<Outcome> {
    debug!(target_id = %target.id, command = ?target.command, "target resolved");
    let report = verify_target(target).context("verify target")?;
    for line in report.summary_lines() {
        println!("{line}");
    }
    if let Some(path) = report_path {
        write_report(path, &report).context("write report")?;
        println!("verify: report={}", path.display());
    }
    Ok(report.outcome)
}

/// Resolve the target from either a target file or an inline command.
pub fn resolve_target(
    target_file: Option<&Path>,
    command: Vec<String>,
    runs: Option<u32>,
    timeout_secs: Option<u64>,
) -> Result<Target> {
    match target_file {
        Some(path) => {
            let mut target = TargetFile::load(path)?.target;
            if let Some(runs) = runs {
                target.runs = runs;
            }
            if let Some(timeout_secs) = timeout_secs {
                target.timeout_secs = timeout_secs;
            }
            target
                .validate()
                .with_context(|| format!("validate overrides for {}", path.display()))?;
            Ok(target)
        }
        None => Target::ad_hoc(command, runs.unwrap_or(2), timeout_secs.unwrap_or(30)),
    }
}
