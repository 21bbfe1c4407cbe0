use serde::{Deserialize, Serialize};

use crate::judge::{Judgment, RunRecord};

/// Overall verdict for a target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Consistent transcripts, no failed case.
    Conformant,
    /// Consistent transcripts reporting at least one failed case.
    NonConformant,
    /// The transcript contradicts itself, its exit code, or other runs.
    Inconsistent,
    /// A run timed out or was killed before exiting.
    Error,
}

impl Outcome {
    /// Exit code of `verify check` for this outcome.
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Conformant => 0,
            Outcome::Error => 1,
            Outcome::NonConformant => 2,
            Outcome::Inconsistent => 3,
        }
    }
}

pub fn classify_outcome(runs: &[RunRecord], judgment: &Judgment) -> Outcome {
    if runs.is_empty()
        || runs
            .iter()
            .any(|record| record.timed_out || record.exit_code.is_none())
    {
        return Outcome::Error;
    }
    if !judgment.all_passed() {
        return Outcome::Inconsistent;
    }
    if runs.iter().any(|record| record.transcript.failed_count() > 0) {
        Outcome::NonConformant
    } else {
        Outcome::Conformant
    }
}
