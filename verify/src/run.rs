//! Target execution orchestration.
//!
//! Runs the target the configured number of times, then judges the captured
//! transcripts together.

use anyhow::{Context, Result};
use chrono::Utc;
use runner::io::process::{RunLimits, run_command_with_timeout};
use sha2::{Digest, Sha256};
use tracing::{debug, info, instrument};

use crate::judge::{RunRecord, judge};
use crate::outcome::classify_outcome;
use crate::report::{RunSummary, VerifyReport};
use crate::target::Target;
use crate::transcript::Transcript;

/// Bytes of stderr kept per run in the report.
const STDERR_TAIL_BYTES: usize = 2048;

/// Run `target` end-to-end and build its report.
#[instrument(skip_all, fields(target_id = %target.id, runs = target.runs))]
pub fn verify_target(target: &Target) -> Result<VerifyReport> {
    info!("verification started");
    let started_at = Utc::now();
    let limits = RunLimits {
        timeout: target.timeout(),
        ..RunLimits::default()
    };

    let mut records = Vec::with_capacity(target.runs as usize);
    for run in 1..=target.runs {
        debug!(run, "starting run");
        let output = run_command_with_timeout(&target.command, limits)
            .with_context(|| format!("run {} (run {run})", target.id))?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        if !output.stderr.is_empty() {
            debug!(
                run,
                bytes = output.stderr.len(),
                truncated = output.stderr_truncated,
                "target wrote to stderr"
            );
        }
        records.push(RunRecord {
            run,
            exit_code: output.exit_code(),
            timed_out: output.timed_out,
            elapsed_ms: output.elapsed.as_millis() as u64,
            transcript_sha256: transcript_digest(&output.stdout),
            stdout_complete: output.stdout_complete(),
            transcript: Transcript::parse(&stdout),
            stderr_tail: stderr_tail(&output.stderr, STDERR_TAIL_BYTES),
        });
    }

    let checks = judge(&records, target.expected_cases);
    let outcome = classify_outcome(&records, &checks);
    let failures = records
        .first()
        .map(|record| record.transcript.failures().cloned().collect())
        .unwrap_or_default();
    info!(?outcome, "verification complete");

    Ok(VerifyReport {
        target_id: target.id.clone(),
        command: target.command.clone(),
        started_at,
        finished_at: Utc::now(),
        outcome,
        runs: records.iter().map(RunSummary::from).collect(),
        checks,
        failures,
    })
}

/// Lowercase hex SHA-256 of the raw transcript bytes.
pub fn transcript_digest(stdout: &[u8]) -> String {
    hex::encode(Sha256::digest(stdout))
}

/// The last `limit` bytes of `stderr`, decoded lossily.
pub fn stderr_tail(stderr: &[u8], limit: usize) -> String {
    let start = stderr.len().saturating_sub(limit);
    String::from_utf8_lossy(&stderr[start..]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Outcome;

    #[test]
    fn digest_is_stable_hex() {
        let digest = transcript_digest(b"");
        assert_eq!(
            digest,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(transcript_digest(b"PASSED\n"), transcript_digest(b"PASSED\n"));
    }

    #[test]
    fn stderr_tail_keeps_the_end() {
        assert_eq!(stderr_tail(b"", 8), "");
        assert_eq!(stderr_tail(b"short\n", 64), "short\n");
        assert_eq!(stderr_tail(b"0123456789", 4), "6789");
    }

    #[test]
    fn stderr_tail_tolerates_split_utf8() {
        // "é" is two bytes; cutting between them leaves a lone continuation byte.
        let tail = stderr_tail("aé".as_bytes(), 1);
        assert_eq!(tail, "\u{FFFD}");
    }

    #[cfg(unix)]
    fn shell_target(script: &str, runs: u32) -> Target {
        Target::ad_hoc(
            vec!["sh".to_string(), "-c".to_string(), script.to_string()],
            runs,
            10,
        )
        .expect("target")
    }

    #[cfg(unix)]
    #[test]
    fn consistent_failure_is_non_conformant() {
        let target = shell_target(
            "printf 'Test 1\\t(RemZero)...\\tFAILED\\nExpected: 256 but was: 0\\n'; exit 1",
            2,
        );
        let report = verify_target(&target).expect("verify");
        assert_eq!(report.outcome, Outcome::NonConformant);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.runs.len(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn lying_exit_code_is_inconsistent() {
        let target = shell_target("printf 'Test 1\\t(4/2)...\\tFAILED\\n'; exit 0", 1);
        let report = verify_target(&target).expect("verify");
        assert_eq!(report.outcome, Outcome::Inconsistent);
    }

    #[cfg(unix)]
    #[test]
    fn emulator_stderr_reaches_the_report() {
        let target = shell_target(
            "echo 'emu-warning: unimplemented csr' >&2; printf 'Test 1\\t(4/2)...\\tPASSED\\n'; exit 0",
            1,
        );
        let report = verify_target(&target).expect("verify");
        assert_eq!(report.outcome, Outcome::Conformant);
        assert!(report.runs[0].stderr_tail.contains("emu-warning"));
    }
}
