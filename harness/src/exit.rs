//! Exit aggregator: the failure count becomes the process exit status.

use crate::assert::FailureCounter;
use crate::runtime::Runtime;
use crate::scenarios::{Sequencer, Suite};

/// Exit status for a finished run: `0` when every check passed, otherwise the
/// failure count.
///
/// Hosts with an 8-bit status channel keep only the low byte, so 256 failures
/// read as 0 there. Consumers should only rely on zero versus non-zero.
pub fn exit_code(failures: FailureCounter) -> i32 {
    failures.get() as i32
}

/// Terminate the process with the status derived from `failures`.
pub fn finish<R: Runtime + ?Sized>(rt: &mut R, failures: FailureCounter) -> ! {
    rt.terminate(exit_code(failures))
}

/// Run `suite` to completion and terminate with its exit status.
pub fn run<R: Runtime + ?Sized>(rt: &mut R, suite: Suite) -> ! {
    let failures = Sequencer::new(&mut *rt).run(suite);
    finish(rt, failures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Recorder;

    fn counter_with(failures: u32) -> FailureCounter {
        let mut counter = FailureCounter::new();
        for _ in 0..failures {
            counter.record_failure();
        }
        counter
    }

    #[test]
    fn clean_run_exits_zero() {
        assert_eq!(exit_code(FailureCounter::new()), 0);
    }

    #[test]
    fn failures_become_exit_code() {
        assert_eq!(exit_code(counter_with(1)), 1);
        assert_eq!(exit_code(counter_with(18)), 18);
    }

    #[test]
    fn wide_counts_pass_through_untruncated() {
        // Truncation is the host's job; 256 only reads as 0 after `exit(2)`.
        assert_eq!(exit_code(counter_with(256)), 256);
        assert_eq!(exit_code(counter_with(256)) & 0xFF, 0);
    }

    #[test]
    fn run_terminates_with_failure_count() {
        let result: std::thread::Result<()> = std::panic::catch_unwind(|| {
            let mut rt = Recorder::default();
            run(&mut rt, Suite::Core);
        });
        let payload = result.expect_err("run never returns");
        let message = payload
            .downcast_ref::<std::string::String>()
            .expect("formatted panic message");
        assert_eq!(message, "terminate(0)");
    }
}
