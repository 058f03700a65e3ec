// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

#[test]
#[serial]
fn port_defaults_to_5000() {
    std::env::remove_var("PORT");
    assert_eq!(port().unwrap(), 5000);
}

#[test]
#[serial]
fn port_from_env() {
    std::env::set_var("PORT", " 8080 ");
    assert_eq!(port().unwrap(), 8080);
    std::env::remove_var("PORT");
}

#[test]
#[serial]
fn port_rejects_garbage() {
    std::env::set_var("PORT", "eighty");
    let err = port().unwrap_err();
    assert!(matches!(err, DaemonError::InvalidPort(ref raw) if raw == "eighty"));
    std::env::remove_var("PORT");
}

#[test]
#[serial]
fn blank_token_is_unset() {
    std::env::set_var("REMOTE_API_TOKEN", "   ");
    assert_eq!(api_token(), None);
    std::env::set_var("REMOTE_API_TOKEN", " s3cret ");
    assert_eq!(api_token().as_deref(), Some("s3cret"));
    std::env::remove_var("REMOTE_API_TOKEN");
}

#[test]
#[serial]
fn state_dir_prefers_explicit_override() {
    std::env::set_var("DR_STATE_DIR", "/tmp/dr-state");
    std::env::set_var("XDG_STATE_HOME", "/tmp/xdg");
    assert_eq!(state_dir().unwrap(), PathBuf::from("/tmp/dr-state"));
    std::env::remove_var("DR_STATE_DIR");
    assert_eq!(state_dir().unwrap(), PathBuf::from("/tmp/xdg/deskrelay"));
    std::env::remove_var("XDG_STATE_HOME");
}

#[test]
#[serial]
fn home_dir_override() {
    std::env::set_var("DR_HOME", "/srv/desk");
    assert_eq!(home_dir().unwrap(), PathBuf::from("/srv/desk"));
    std::env::remove_var("DR_HOME");
}

#[test]
#[serial]
fn launcher_defaults() {
    std::env::remove_var("DR_BROWSER_URL");
    std::env::remove_var("DR_EDITOR");
    assert_eq!(browser_url(), DEFAULT_BROWSER_URL);
    assert_eq!(editor(), DEFAULT_EDITOR);

    std::env::set_var("DR_EDITOR", "mousepad");
    assert_eq!(editor(), "mousepad");
    std::env::remove_var("DR_EDITOR");
}
