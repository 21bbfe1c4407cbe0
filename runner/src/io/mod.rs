//! Side-effecting helpers for the hosted runner.

pub mod config;
pub mod process;
pub mod stdout;
