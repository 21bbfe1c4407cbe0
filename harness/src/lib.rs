//! Integer-arithmetic conformance harness.
//!
//! Runs a fixed, ordered list of arithmetic scenarios and checks every result
//! against a known oracle value. The crate is `no_std` and allocation-free so
//! the same sequence can run on a hosted OS or as a freestanding binary that
//! only has raw `write` and `exit` system calls.
//!
//! Data flows one way:
//!
//! - **[`scenarios`]**: the sequencer. Computes each value and hands the
//!   `(expected, actual)` pair to the assertion engine.
//! - **[`assert`]**: prints `PASSED`/`FAILED` and bumps the failure counter.
//! - **[`runtime`]**: the only host seam (write bytes, terminate).
//! - **[`exit`]**: turns the failure count into the process exit status.
//!
//! [`arith`] and [`decimal`] are pure helpers with no output of their own.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod arith;
pub mod assert;
pub mod decimal;
pub mod exit;
pub mod runtime;
pub mod scenarios;
#[cfg(test)]
mod test_support;

pub use assert::FailureCounter;
pub use exit::run;
pub use runtime::{Runtime, Stream};
pub use scenarios::Suite;
