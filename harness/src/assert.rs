//! Assertion engine: compares oracle and computed values, prints the verdict
//! and records mismatches.
//!
//! Transcript fragments, per case:
//!
//! ```text
//! Test 7\t(DivZero (unsigned))...\tPASSED
//! Test 8\t(DivZero (signed))...\tFAILED
//! Expected: 18446744073709551615 but was: 0
//! ```

use crate::runtime::Runtime;

/// Number of failed assertions so far in this run.
///
/// Starts at zero, only ever grows by one per mismatch, and is read once at the
/// end to form the exit status.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FailureCounter(u32);

impl FailureCounter {
    pub const fn new() -> Self {
        Self(0)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    pub fn record_failure(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    pub const fn is_clean(self) -> bool {
        self.0 == 0
    }
}

/// Print the case label: `Test <number>\t(<name>)...\t`.
///
/// The verdict from [`report_condition`] completes the line.
pub fn begin_case<R: Runtime + ?Sized>(rt: &mut R, number: u32, name: &str) {
    rt.print_text("Test ");
    rt.print_integer(u64::from(number));
    rt.print_text("\t(");
    rt.print_text(name);
    rt.print_text(")");
    rt.print_text("...\t");
}

/// Print `PASSED` or `FAILED` and hand `holds` back unchanged.
pub fn report_condition<R: Runtime + ?Sized>(rt: &mut R, holds: bool) -> bool {
    if holds {
        rt.print_text("PASSED\n");
    } else {
        rt.print_text("FAILED\n");
    }
    holds
}

/// Compare at 64 bits; on mismatch count it and print the diagnostic line.
pub fn assert_equal<R: Runtime + ?Sized>(
    rt: &mut R,
    expected: u64,
    actual: u64,
    failures: &mut FailureCounter,
) -> bool {
    if report_condition(rt, expected == actual) {
        return true;
    }
    failures.record_failure();
    rt.print_text("Expected: ");
    rt.print_integer(expected);
    rt.print_text(" but was: ");
    rt.print_integer(actual);
    rt.print_text("\n");
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Recorder;

    #[test]
    fn label_has_number_and_name() {
        let mut rt = Recorder::default();
        begin_case(&mut rt, 12, "1<<10");
        assert_eq!(rt.stdout_str(), "Test 12\t(1<<10)...\t");
    }

    #[test]
    fn begin_case_leaves_counter_alone() {
        let mut rt = Recorder::default();
        let failures = FailureCounter::new();
        begin_case(&mut rt, 1, "4/2");
        assert!(failures.is_clean());
    }

    #[test]
    fn report_condition_echoes_input() {
        let mut rt = Recorder::default();
        assert!(report_condition(&mut rt, true));
        assert!(!report_condition(&mut rt, false));
        assert_eq!(rt.lines(), ["PASSED", "FAILED"]);
    }

    #[test]
    fn pass_prints_nothing_more() {
        let mut rt = Recorder::default();
        let mut failures = FailureCounter::new();
        assert!(assert_equal(&mut rt, 2, 2, &mut failures));
        assert_eq!(rt.stdout_str(), "PASSED\n");
        assert_eq!(failures.get(), 0);
    }

    #[test]
    fn mismatch_counts_once_and_explains() {
        let mut rt = Recorder::default();
        let mut failures = FailureCounter::new();
        assert!(!assert_equal(&mut rt, 202, 0, &mut failures));
        assert_eq!(failures.get(), 1);
        assert_eq!(rt.stdout_str(), "FAILED\nExpected: 202 but was: 0\n");

        assert!(!assert_equal(&mut rt, u64::MAX, 1, &mut failures));
        assert_eq!(failures.get(), 2);
        assert!(
            rt.stdout_str()
                .ends_with("Expected: 18446744073709551615 but was: 1\n")
        );
    }
}
