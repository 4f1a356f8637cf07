//! Integration tests for the `partsbay` CLI binary.
//!
//! These tests validate argument parsing, help output, shell
//! completions, and error handling — all without a live backend.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `partsbay` binary with env isolation.
///
/// Clears all `PARTSBAY_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn partsbay_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("partsbay");
    cmd.env("HOME", "/tmp/partsbay-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/partsbay-cli-test-nonexistent")
        .env_remove("PARTSBAY_PROFILE")
        .env_remove("PARTSBAY_SERVER")
        .env_remove("PARTSBAY_TOKEN")
        .env_remove("PARTSBAY_OUTPUT")
        .env_remove("PARTSBAY_TIMEOUT");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = partsbay_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    partsbay_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("device hierarchy")
            .and(predicate::str::contains("devices"))
            .and(predicate::str::contains("brands"))
            .and(predicate::str::contains("tree")),
    );
}

#[test]
fn test_subcommand_help() {
    partsbay_cmd()
        .args(["models", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("model")
                .and(predicate::str::contains("add"))
                .and(predicate::str::contains("disable")),
        );
}

#[test]
fn test_version_flag() {
    partsbay_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("partsbay"));
}

// ── Completions ─────────────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    partsbay_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("partsbay"));
}

// ── Config-less invocation ──────────────────────────────────────────

#[test]
fn test_tree_without_config_fails_with_guidance() {
    let output = partsbay_cmd().arg("tree").output().unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        text.contains("--server") || text.contains("config init"),
        "Expected configuration guidance in output:\n{text}"
    );
}

#[test]
fn test_config_path_prints_a_path() {
    partsbay_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_invalid_server_url_is_rejected() {
    let output = partsbay_cmd()
        .args(["--server", "not a url", "devices", "list"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        text.contains("invalid --server URL"),
        "Expected URL validation message in output:\n{text}"
    );
}
