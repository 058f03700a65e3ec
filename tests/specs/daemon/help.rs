//! Daemon help and version specs
//!
//! Verify drd --help, --version, and related flags work without reading
//! configuration or binding a port.

use crate::prelude::*;

fn stdout_of(args: &[&str]) -> String {
    let assert = drd().args(args).env("PORT", "not-a-port").assert().success();
    String::from_utf8_lossy(&assert.get_output().stdout).into_owned()
}

#[test]
fn drd_version_shows_version() {
    for flag in ["--version", "-v", "-V"] {
        let stdout = stdout_of(&[flag]);
        assert!(
            stdout.starts_with("drd 0.1.0"),
            "expected version for {flag}, got: {stdout}"
        );
    }
}

#[test]
fn drd_help_shows_usage() {
    for flag in ["--help", "-h", "help"] {
        let stdout = stdout_of(&[flag]);
        assert!(stdout.contains("USAGE:"), "expected USAGE for {flag}, got: {stdout}");
        assert!(stdout.contains("REMOTE_API_TOKEN"));
        assert!(stdout.contains("--version"));
    }
}

#[test]
fn drd_unknown_arg_fails() {
    let assert = drd().arg("--bogus").assert().failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(
        stderr.contains("unexpected argument"),
        "expected error message, got: {stderr}"
    );
}

#[test]
fn drd_rejects_invalid_port() {
    let state = tempfile::tempdir().unwrap();
    let assert = drd()
        .env("PORT", "eighty")
        .env("DR_STATE_DIR", state.path())
        .assert()
        .failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("Invalid PORT"), "got: {stderr}");
}
