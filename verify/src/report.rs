//! Verification report: what ran, what each run printed, and the verdict.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::judge::{Judgment, RunRecord};
use crate::outcome::Outcome;
use crate::transcript::CaseRecord;

#[derive(Debug, Serialize)]
pub struct VerifyReport {
    pub target_id: String,
    pub command: Vec<String>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub outcome: Outcome,
    pub runs: Vec<RunSummary>,
    pub checks: Judgment,
    /// Failed cases from the first run.
    pub failures: Vec<CaseRecord>,
}

#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub run: u32,
    pub exit_code: Option<i32>,
    pub timed_out: bool,
    pub elapsed_ms: u64,
    pub transcript_sha256: String,
    pub cases: usize,
    pub failed: usize,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub stderr_tail: String,
}

impl From<&RunRecord> for RunSummary {
    fn from(record: &RunRecord) -> Self {
        Self {
            run: record.run,
            exit_code: record.exit_code,
            timed_out: record.timed_out,
            elapsed_ms: record.elapsed_ms,
            transcript_sha256: record.transcript_sha256.clone(),
            cases: record.transcript.cases.len(),
            failed: record.transcript.failed_count(),
            stderr_tail: record.stderr_tail.clone(),
        }
    }
}

impl VerifyReport {
    /// Human-readable summary lines, one fact per line.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "verify: target={} outcome={:?} runs={}",
            self.target_id,
            self.outcome,
            self.runs.len()
        )];
        for run in &self.runs {
            lines.push(format!(
                "verify: run={} exit={:?} cases={} failed={} sha256={}",
                run.run, run.exit_code, run.cases, run.failed, run.transcript_sha256
            ));
            if let Some(last) = run.stderr_tail.lines().last() {
                lines.push(format!("verify: run={} stderr: {}", run.run, last));
            }
        }
        for check in &self.checks.checks {
            let verdict = if check.passed() { "ok" } else { "FAIL" };
            lines.push(format!("verify: check {} {}", check.label(), verdict));
        }
        for case in &self.failures {
            lines.push(format!(
                "verify: failed case {} ({}) expected={} actual={}",
                case.number,
                case.name,
                display_value(case.expected),
                display_value(case.actual)
            ));
        }
        lines
    }
}

fn display_value(value: Option<u64>) -> String {
    value.map_or_else(|| "?".to_string(), |v| v.to_string())
}

pub fn write_report(path: &Path, report: &VerifyReport) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let contents = serde_json::to_string_pretty(report).context("serialize report")?;
    fs::write(path, format!("{contents}\n"))
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
