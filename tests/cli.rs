//! Integration tests for top-level CLI behavior.

use std::process::Command;

fn run_skiff(args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_skiff");
    Command::new(bin).args(args).env_remove("SKIFF_TOKEN").output().expect("failed to run skiff binary")
}

#[test]
fn run_prints_captured_output() {
    let output = run_skiff(&["run", "echo hello"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "hello\n");
}

#[test]
fn run_passes_exit_codes_through() {
    let output = run_skiff(&["run", "exit 3"]);
    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stdout).is_empty());
}

#[test]
fn run_argv_form_executes_directly() {
    let output = run_skiff(&["run", "printf", "one"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "one\n");
}

#[test]
fn run_missing_binary_reports_a_start_failure() {
    let output = run_skiff(&["run", "skiff-no-such-binary", "x"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to start"));
}

#[test]
fn run_accepts_no_interaction() {
    let output = run_skiff(&["run", "--no-interaction", "echo quiet"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "quiet\n");
}

#[test]
fn run_without_a_command_shows_an_error() {
    let output = run_skiff(&["run"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("COMMAND") || stderr.contains("command"));
}

#[test]
fn aliases_without_token_fails_with_guidance() {
    let output = run_skiff(&["aliases"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("SKIFF_TOKEN"));
}

#[test]
fn open_help_shows_usage() {
    let output = run_skiff(&["open", "--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("URL") || stdout.contains("url"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_skiff(&["nonsense"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unrecognized subcommand"));
}
