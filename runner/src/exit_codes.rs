//! Stable exit codes for runner CLI commands.
//!
//! `runner run` exits with the harness failure count (0 when every check
//! passed). The codes below cover the runner's own outcomes.

/// Command succeeded.
pub const OK: i32 = 0;
/// Invalid CLI usage, unreadable config, or another runner error.
///
/// Kept well above any failure count a suite can produce.
pub const INVALID: i32 = 125;

#[cfg(test)]
mod tests {
    use harness::Suite;
    use harness::scenarios::case_count;

    use super::*;

    #[test]
    fn invalid_is_outside_every_failure_count() {
        for suite in [Suite::Core, Suite::Extended] {
            assert!(case_count(suite) < INVALID as usize);
        }
        assert_ne!(OK, INVALID);
    }
}
