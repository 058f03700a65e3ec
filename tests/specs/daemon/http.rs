//! HTTP surface specs against a running daemon.
//!
//! Only commands that never reach the desktop are submitted, so these run
//! without an X11 session.

use crate::prelude::*;
use serde_json::json;
use serial_test::serial;

#[test]
#[serial]
fn health_reports_started_worker() {
    let daemon = Daemon::start(None);
    let (status, body) = daemon.get("/api/health", None);
    assert_eq!(status, 200);
    assert_eq!(body["ok"], true);
    assert_eq!(body["worker_started"], true);
    assert!(body["queue_size"].is_u64());
}

#[test]
#[serial]
fn startup_marker_written_to_log() {
    let daemon = Daemon::start(None);
    let log = std::fs::read_to_string(daemon.log_path()).unwrap();
    assert!(log.contains("--- drd: starting (pid: "), "got: {log}");
}

#[test]
#[serial]
fn unknown_command_reaches_error_state() {
    let daemon = Daemon::start(None);
    let (status, body) = daemon.post("/api/command", &json!({"text": "bogus command"}));
    assert_eq!(status, 200);
    assert_eq!(body["message"], "Command queued.");

    daemon.wait_until(|d| d.get("/api/logs", None).1["logs"][0]["status"] == "error");
    let (_, logs) = daemon.get("/api/logs", None);
    let logs = logs["logs"].as_array().unwrap();
    assert_eq!(logs.len(), 2);
    assert!(logs[0]["output"]
        .as_str()
        .unwrap()
        .starts_with("Unknown command."));
    assert_eq!(logs[1]["status"], "queued");
    assert_eq!(logs[0]["request_id"], logs[1]["request_id"]);
}

#[test]
#[serial]
fn missing_file_is_reported() {
    let daemon = Daemon::start(None);
    daemon.post("/api/command", &json!({"text": "open file ~/nope.txt"}));

    daemon.wait_until(|d| d.get("/api/logs", None).1["logs"][0]["status"] == "error");
    let (_, logs) = daemon.get("/api/logs", None);
    let expected = format!(
        "File not found: {}",
        daemon.home.path().join("nope.txt").display()
    );
    assert_eq!(logs["logs"][0]["output"], expected);
}

#[test]
#[serial]
fn token_required_when_configured() {
    let daemon = Daemon::start(Some("s3cret"));

    let (status, body) = daemon.post("/api/command", &json!({"text": "bogus"}));
    assert_eq!(status, 401);
    assert_eq!(body, json!({"ok": false, "error": "Unauthorized request."}));

    let (status, _) = daemon.post("/api/command", &json!({"text": "bogus", "token": "s3cret"}));
    assert_eq!(status, 200);

    assert_eq!(daemon.get("/api/logs", None).0, 401);
    assert_eq!(daemon.get("/api/logs", Some("s3cret")).0, 200);
}

#[test]
#[serial]
fn blank_text_is_rejected() {
    let daemon = Daemon::start(None);
    let (status, body) = daemon.post("/api/command", &json!({"text": "   "}));
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Command text is required.");
}
