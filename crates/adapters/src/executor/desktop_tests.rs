// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

#[yare::parameterized(
    enter        = { "enter", "Return" },
    enter_upper  = { "ENTER", "Return" },
    escape       = { "esc", "Escape" },
    ctrl         = { "Ctrl", "ctrl" },
    control      = { "control", "ctrl" },
    windows      = { "win", "super" },
    backspace    = { "backspace", "BackSpace" },
    page_down    = { "pagedown", "Next" },
    function_key = { "f5", "F5" },
    f12_upper    = { "F12", "F12" },
    letter       = { "S", "s" },
    digit        = { "1", "1" },
    raw_keysym   = { "XF86AudioMute", "XF86AudioMute" },
    f_word       = { "foo", "foo" },
    f_out_range  = { "f99", "f99" },
)]
fn keysym_mapping(name: &str, expected: &str) {
    assert_eq!(keysym(name), expected);
}

#[tokio::test]
async fn launch_with_empty_argv_fails() {
    let executor = DesktopExecutor::with_timeout(Duration::from_secs(1));
    let err = executor.launch_application(&[]).await.unwrap_err();
    assert!(matches!(err, ExecutorError::SpawnFailed { .. }), "got: {err:?}");
}

#[tokio::test]
async fn launch_missing_program_reports_missing_dependency() {
    let executor = DesktopExecutor::with_timeout(Duration::from_secs(1));
    let err = executor
        .launch_application(&["/nonexistent/editor".to_string()])
        .await
        .unwrap_err();
    assert!(
        matches!(err, ExecutorError::MissingDependency(ref m) if m.contains("/nonexistent/editor")),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn touch_into_missing_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("notes.txt");
    let executor = DesktopExecutor::with_timeout(Duration::from_secs(1));
    let err = executor.touch_and_open(&path).await.unwrap_err();
    assert!(matches!(err, ExecutorError::Io { .. }), "got: {err:?}");
    assert!(err.to_string().starts_with("cannot create"));
}

#[test]
fn not_found_maps_to_missing_dependency() {
    let err = spawn_error(
        "xdotool",
        SubprocessError::Io {
            description: "xdotool".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        },
    );
    assert!(err.to_string().starts_with("xdotool is not installed"));
}

#[test]
fn timeout_maps_to_command_failed() {
    let err = spawn_error(
        "xdotool",
        SubprocessError::Timeout {
            description: "xdotool".to_string(),
            secs: 10,
        },
    );
    assert_eq!(err.to_string(), "xdotool timed out after 10s");
}

/// Scratch directory holding shell-script stand-ins for desktop tools.
struct FakeTools {
    dir: tempfile::TempDir,
}

impl FakeTools {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn script(&self, name: &str, body: &str) -> String {
        let path = self.path(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path.display().to_string()
    }

    /// `xdotool` that appends its arguments to `xdotool.log`, after `delay`.
    fn xdotool(&self, delay: &str) -> String {
        let log = self.path("xdotool.log");
        self.script(
            "xdotool",
            &format!("sleep {delay}\necho \"$@\" >> '{}'", log.display()),
        )
    }

    /// Clipboard writer that stores stdin in `clipboard.txt`.
    fn clipboard(&self) -> Vec<String> {
        let out = self.path("clipboard.txt");
        vec![self.script("xclip", &format!("cat > '{}'", out.display()))]
    }

    fn xdotool_calls(&self) -> String {
        std::fs::read_to_string(self.path("xdotool.log")).unwrap_or_default()
    }

    fn clipboard_contents(&self) -> Option<String> {
        std::fs::read_to_string(self.path("clipboard.txt")).ok()
    }
}

#[test]
fn typing_timeout_grows_with_text() {
    let base = Duration::from_secs(10);
    assert_eq!(typing_timeout(base, ""), base);
    assert_eq!(typing_timeout(base, "héllo"), Duration::from_millis(10_150));
    assert_eq!(
        typing_timeout(base, &"a".repeat(400)),
        Duration::from_secs(22)
    );
}

#[tokio::test]
#[serial]
async fn inject_text_pastes_through_clipboard() {
    let tools = FakeTools::new();
    let executor = DesktopExecutor::with_timeout(Duration::from_secs(5))
        .with_xdotool(tools.xdotool("0"))
        .with_clipboard_tools(vec![tools.clipboard()]);

    executor.inject_text("-héllo wörld").await.unwrap();

    assert_eq!(tools.clipboard_contents().as_deref(), Some("-héllo wörld"));
    assert_eq!(tools.xdotool_calls(), "key -- ctrl+v\n");
}

#[tokio::test]
#[serial]
async fn inject_text_types_without_clipboard_tool() {
    let tools = FakeTools::new();
    let executor = DesktopExecutor::with_timeout(Duration::from_secs(5))
        .with_xdotool(tools.xdotool("0"))
        .with_clipboard_tools(vec![vec!["/nonexistent/xclip".to_string()]]);

    executor.inject_text("hello").await.unwrap();

    assert_eq!(tools.clipboard_contents(), None);
    assert_eq!(tools.xdotool_calls(), "type --delay 30 -- hello\n");
}

#[tokio::test]
#[serial]
async fn inject_text_types_when_clipboard_tool_fails() {
    let tools = FakeTools::new();
    let broken = tools.script("xsel", "exit 1");
    let executor = DesktopExecutor::with_timeout(Duration::from_secs(5))
        .with_xdotool(tools.xdotool("0"))
        .with_clipboard_tools(vec![vec![broken]]);

    executor.inject_text("hello").await.unwrap();

    assert_eq!(tools.xdotool_calls(), "type --delay 30 -- hello\n");
}

#[tokio::test]
#[serial]
async fn long_typed_text_outlasts_base_timeout() {
    // 40 chars at 30ms each allows 1.3s in total; the fake takes 0.5s,
    // which is well past the 100ms base
    let tools = FakeTools::new();
    let executor = DesktopExecutor::with_timeout(Duration::from_millis(100))
        .with_xdotool(tools.xdotool("0.5"))
        .with_clipboard_tools(Vec::new());

    let text = "a".repeat(40);
    executor.inject_text(&text).await.unwrap();

    assert_eq!(tools.xdotool_calls(), format!("type --delay 30 -- {text}\n"));
}

#[tokio::test]
#[serial]
async fn key_presses_keep_base_timeout() {
    let tools = FakeTools::new();
    let executor = DesktopExecutor::with_timeout(Duration::from_millis(100))
        .with_xdotool(tools.xdotool("2"));

    let err = executor.press_key("enter").await.unwrap_err();
    assert!(
        matches!(err, ExecutorError::CommandFailed(ref m) if m.contains("timed out")),
        "got: {err:?}"
    );
}
