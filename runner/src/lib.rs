//! Hosted execution of the arithmetic conformance harness.
//!
//! The `harness` crate is `no_std`; this crate supplies what a normal OS
//! process needs around it:
//!
//! - **[`io::stdout`]**: a [`harness::Runtime`] backed by the standard library.
//! - **[`io::config`]**: optional `harness.toml` (suite selection, log filter).
//! - **[`io::process`]**: bounded child-process capture, used by `verify`.
//! - **[`logging`]**: stderr tracing, so stdout carries only the transcript.

pub mod exit_codes;
pub mod io;
pub mod logging;
