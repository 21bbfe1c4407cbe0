//! Consistency checks over one or more captured runs of the same target.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::transcript::Transcript;

/// One captured execution of the target.
#[derive(Debug, Clone)]
pub struct RunRecord {
    pub run: u32,
    pub exit_code: Option<i32>,
    pub timed_out: bool,
    pub elapsed_ms: u64,
    /// SHA-256 of the raw stdout, lowercase hex.
    pub transcript_sha256: String,
    pub stdout_complete: bool,
    pub transcript: Transcript,
    /// Last bytes the target (or its emulator) wrote to stderr.
    pub stderr_tail: String,
}

/// Collected check outcomes for a target.
#[derive(Debug, Serialize, Deserialize)]
pub struct Judgment {
    pub checks: Vec<CheckOutcome>,
}

impl Judgment {
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(CheckOutcome::passed)
    }
}

/// Result of a single check.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CheckOutcome {
    /// Exit code equals the number of `FAILED` lines, modulo the 8-bit status.
    ExitMatchesFailures {
        passed: bool,
        run: u32,
        exit_code: Option<i32>,
        failed_lines: usize,
    },
    /// Case numbers run 1, 2, 3, ... with no gap or repeat.
    NumberingMonotonic {
        passed: bool,
        run: u32,
        first_break: Option<u32>,
    },
    /// Every line is a case label or a diagnostic for the preceding failure.
    WellFormed {
        passed: bool,
        run: u32,
        unparsed_lines: Vec<String>,
    },
    /// All runs produced the same transcript and exit code.
    Deterministic {
        passed: bool,
        distinct_transcripts: usize,
        distinct_exit_codes: usize,
    },
    CaseCount {
        passed: bool,
        expected: usize,
        actual: usize,
    },
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        match self {
            CheckOutcome::ExitMatchesFailures { passed, .. }
            | CheckOutcome::NumberingMonotonic { passed, .. }
            | CheckOutcome::WellFormed { passed, .. }
            | CheckOutcome::Deterministic { passed, .. }
            | CheckOutcome::CaseCount { passed, .. } => *passed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CheckOutcome::ExitMatchesFailures { .. } => "exit_matches_failures",
            CheckOutcome::NumberingMonotonic { .. } => "numbering_monotonic",
            CheckOutcome::WellFormed { .. } => "well_formed",
            CheckOutcome::Deterministic { .. } => "deterministic",
            CheckOutcome::CaseCount { .. } => "case_count",
        }
    }
}

/// Exit status a host reports for `failed` failures (low 8 bits).
pub fn expected_exit_code(failed: usize) -> i32 {
    (failed % 256) as i32
}

/// Run every check over `runs`.
#[instrument(skip_all, fields(runs = runs.len()))]
pub fn judge(runs: &[RunRecord], expected_cases: Option<usize>) -> Judgment {
    let mut checks = Vec::new();

    for record in runs {
        let failed_lines = record.transcript.failed_count();
        let passed = record.exit_code == Some(expected_exit_code(failed_lines));
        debug!(run = record.run, exit_code = ?record.exit_code, failed_lines, passed, "exit check");
        checks.push(CheckOutcome::ExitMatchesFailures {
            passed,
            run: record.run,
            exit_code: record.exit_code,
            failed_lines,
        });

        let first_break = record.transcript.first_numbering_break();
        checks.push(CheckOutcome::NumberingMonotonic {
            passed: first_break.is_none() && !record.transcript.cases.is_empty(),
            run: record.run,
            first_break,
        });

        checks.push(CheckOutcome::WellFormed {
            passed: record.transcript.unparsed.is_empty() && record.stdout_complete,
            run: record.run,
            unparsed_lines: record.transcript.unparsed.clone(),
        });
    }

    let digests: BTreeSet<&str> = runs
        .iter()
        .map(|record| record.transcript_sha256.as_str())
        .collect();
    let exit_codes: BTreeSet<Option<i32>> = runs.iter().map(|record| record.exit_code).collect();
    checks.push(CheckOutcome::Deterministic {
        passed: digests.len() <= 1 && exit_codes.len() <= 1,
        distinct_transcripts: digests.len(),
        distinct_exit_codes: exit_codes.len(),
    });

    if let Some(expected) = expected_cases {
        // Determinism is checked above; count cases from the first run.
        let actual = runs
            .first()
            .map(|record| record.transcript.cases.len())
            .unwrap_or(0);
        checks.push(CheckOutcome::CaseCount {
            passed: actual == expected,
            expected,
            actual,
        });
    }

    Judgment { checks }
}
