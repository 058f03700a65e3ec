//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::io::{Read, Write};
use std::net::{Ipv4Addr, TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

pub const SPEC_POLL_INTERVAL_MS: u64 = 20;
pub const SPEC_WAIT_MAX_MS: u64 = 5000;

/// Returns the path to a workspace binary, checking the llvm-cov target
/// directory first, then falling back to the test binary's own directory.
fn binary_path(name: &str) -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));

    let llvm_cov_path = manifest_dir.join("target/llvm-cov-target/debug").join(name);
    if llvm_cov_path.exists() {
        return llvm_cov_path;
    }

    let standard = manifest_dir.join("target/debug").join(name);
    if standard.exists() {
        return standard;
    }

    // The test binary lives at target/debug/deps/specs-<hash>
    if let Ok(exe) = std::env::current_exe() {
        if let Some(debug_dir) = exe.parent().and_then(|d| d.parent()) {
            let fallback = debug_dir.join(name);
            if fallback.exists() {
                return fallback;
            }
        }
    }

    standard
}

pub fn drd_binary() -> PathBuf {
    binary_path("drd")
}

pub fn drd() -> assert_cmd::Command {
    assert_cmd::Command::new(drd_binary())
}

fn free_port() -> u16 {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).unwrap();
    listener.local_addr().unwrap().port()
}

/// A running daemon with isolated state and home directories.
/// Killed on drop.
pub struct Daemon {
    child: Child,
    pub port: u16,
    pub state: tempfile::TempDir,
    pub home: tempfile::TempDir,
}

impl Daemon {
    pub fn start(token: Option<&str>) -> Self {
        let state = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        let port = free_port();

        let mut cmd = Command::new(drd_binary());
        cmd.env("PORT", port.to_string())
            .env("DR_STATE_DIR", state.path())
            .env("DR_HOME", home.path())
            .env("DR_XDOTOOL_TIMEOUT_MS", "500")
            .env_remove("REMOTE_API_TOKEN")
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        if let Some(token) = token {
            cmd.env("REMOTE_API_TOKEN", token);
        }
        let child = cmd.spawn().unwrap();

        let daemon = Self {
            child,
            port,
            state,
            home,
        };
        daemon.wait_until(|d| d.get("/api/health", None).0 == 200);
        daemon
    }

    pub fn log_path(&self) -> PathBuf {
        self.state.path().join("drd.log")
    }

    /// Poll `check` until it passes or the wait deadline elapses.
    pub fn wait_until(&self, check: impl Fn(&Self) -> bool) {
        let deadline = Instant::now() + Duration::from_millis(SPEC_WAIT_MAX_MS);
        while Instant::now() < deadline {
            if check(self) {
                return;
            }
            std::thread::sleep(Duration::from_millis(SPEC_POLL_INTERVAL_MS));
        }
        panic!("condition not met within {SPEC_WAIT_MAX_MS}ms");
    }

    pub fn get(&self, path: &str, token: Option<&str>) -> (u16, serde_json::Value) {
        self.request("GET", path, token, "")
    }

    pub fn post(&self, path: &str, body: &serde_json::Value) -> (u16, serde_json::Value) {
        self.request("POST", path, None, &body.to_string())
    }

    fn request(
        &self,
        method: &str,
        path: &str,
        token: Option<&str>,
        body: &str,
    ) -> (u16, serde_json::Value) {
        let Ok(mut stream) = TcpStream::connect((Ipv4Addr::LOCALHOST, self.port)) else {
            return (0, serde_json::Value::Null);
        };
        stream
            .set_read_timeout(Some(Duration::from_secs(5)))
            .unwrap();
        let token_header = token
            .map(|t| format!("X-Remote-Token: {t}\r\n"))
            .unwrap_or_default();
        let request = format!(
            "{method} {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\
             Content-Type: application/json\r\nContent-Length: {}\r\n{token_header}\r\n{body}",
            body.len()
        );
        if stream.write_all(request.as_bytes()).is_err() {
            return (0, serde_json::Value::Null);
        }
        let mut raw = String::new();
        if stream.read_to_string(&mut raw).is_err() {
            return (0, serde_json::Value::Null);
        }

        let status = raw
            .split_whitespace()
            .nth(1)
            .and_then(|s| s.parse().ok())
            .unwrap_or(0);
        let body = raw.split_once("\r\n\r\n").map(|(_, b)| b).unwrap_or("");
        (status, serde_json::from_str(body).unwrap_or_default())
    }
}

impl Drop for Daemon {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
