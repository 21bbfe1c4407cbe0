//! CLI tests for `runner run` and `runner list`.
//!
//! Spawns the runner binary and checks the transcript and exit code
//! contracts: exit 0 iff no `FAILED` line, stable output across runs.

use std::fs;
use std::process::{Command, Output};

use runner::exit_codes;

fn runner(dir: &std::path::Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_runner"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("spawn runner")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .expect("ascii transcript")
        .lines()
        .map(String::from)
        .collect()
}

#[test]
fn core_run_passes_and_exits_ok() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = runner(temp.path(), &["run"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 32);
    assert!(lines.iter().all(|line| line.ends_with("\tPASSED")));
    assert_eq!(lines[10], "Test 11\t(RemZero)...\tPASSED");
}

#[test]
fn transcript_is_deterministic() {
    let temp = tempfile::tempdir().expect("tempdir");
    let first = runner(temp.path(), &["run", "--suite", "extended"]);
    let second = runner(temp.path(), &["run", "--suite", "extended"]);
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.status.code(), Some(0));
}

#[test]
fn config_file_selects_suite() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("harness.toml"), "suite = \"extended\"\n").expect("write config");

    let output = runner(temp.path(), &["run"]);
    assert_eq!(output.status.code(), Some(0));
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 38);
    assert_eq!(lines[32], "Test 33\t(DivOverflow)...\tPASSED");
}

#[test]
fn invalid_config_exits_invalid() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("harness.toml"), "suite = 7\n").expect("write config");

    let output = runner(temp.path(), &["run"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(output.stdout.is_empty());
}

#[test]
fn list_json_numbers_cases_from_one() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = runner(temp.path(), &["list", "--json"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));

    let cases: Vec<serde_json::Value> =
        serde_json::from_slice(&output.stdout).expect("json case list");
    assert_eq!(cases.len(), 32);
    assert_eq!(cases[0]["number"], 1);
    assert_eq!(cases[0]["name"], "4/2");
    assert_eq!(cases[31]["name"], "Factorial");
}
