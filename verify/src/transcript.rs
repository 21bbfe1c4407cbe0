//! Parsing of the harness transcript.
//!
//! The transcript is a human-readable log, one case per line:
//!
//! ```text
//! Test 3\t(5/2)...\tPASSED
//! Test 4\t(pdm)...\tFAILED
//! Expected: 202 but was: 201
//! ```
//!
//! Lines that match neither shape are kept verbatim in `unparsed`.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static CASE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Test (\d+)\t\((.*)\)\.\.\.\t(PASSED|FAILED)$").expect("case line regex")
});

static DIAGNOSTIC_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Expected: (\d+) but was: (\d+)$").expect("diagnostic line regex")
});

/// One case as reported by the harness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseRecord {
    pub number: u32,
    pub name: String,
    pub passed: bool,
    /// Present only for failed cases.
    pub expected: Option<u64>,
    pub actual: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    pub cases: Vec<CaseRecord>,
    pub unparsed: Vec<String>,
}

impl Transcript {
    pub fn parse(text: &str) -> Self {
        let mut transcript = Transcript::default();
        for line in text.lines() {
            if let Some(caps) = CASE_LINE.captures(line)
                && let Ok(number) = caps[1].parse::<u32>()
            {
                transcript.cases.push(CaseRecord {
                    number,
                    name: caps[2].to_string(),
                    passed: &caps[3] == "PASSED",
                    expected: None,
                    actual: None,
                });
                continue;
            }
            if let Some(caps) = DIAGNOSTIC_LINE.captures(line)
                && let Some(last) = transcript.cases.last_mut()
                && !last.passed
                && last.expected.is_none()
                && let (Ok(expected), Ok(actual)) = (caps[1].parse::<u64>(), caps[2].parse::<u64>())
            {
                last.expected = Some(expected);
                last.actual = Some(actual);
                continue;
            }
            transcript.unparsed.push(line.to_string());
        }
        transcript
    }

    pub fn failed_count(&self) -> usize {
        self.cases.iter().filter(|case| !case.passed).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseRecord> {
        self.cases.iter().filter(|case| !case.passed)
    }

    /// First case whose number is not `previous + 1` (starting from 1).
    pub fn first_numbering_break(&self) -> Option<u32> {
        (1u32..)
            .zip(&self.cases)
            .find(|(want, case)| case.number != *want)
            .map(|(_, case)| case.number)
    }
}
