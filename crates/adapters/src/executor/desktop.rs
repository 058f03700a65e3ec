// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! X11 desktop executor: `xdg-open` for launching and opening, the
//! clipboard plus `xdotool` for keyboard input.

use super::{ActionExecutor, ExecutorError};
use crate::subprocess::{pipe_to_stdin, run_with_timeout, spawn_detached, SubprocessError};
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;

const OPENER: &str = "xdg-open";
const XDOTOOL: &str = "xdotool";

/// Clipboard writers tried in order; each reads the text on stdin.
const CLIPBOARD_TOOLS: &[&[&str]] = &[
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
];

const PASTE_CHORD: &str = "ctrl+v";

/// Delay between typed characters when falling back to `xdotool type`.
const TYPE_DELAY: Duration = Duration::from_millis(30);

/// Bound for typing `text`: the base timeout plus the per-character delay,
/// so long text is never cut off partway.
pub(crate) fn typing_timeout(base: Duration, text: &str) -> Duration {
    let chars = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
    base.saturating_add(TYPE_DELAY.saturating_mul(chars))
}

#[derive(Clone, Debug)]
pub struct DesktopExecutor {
    xdotool: String,
    clipboard_tools: Vec<Vec<String>>,
    xdotool_timeout: Duration,
}

impl DesktopExecutor {
    pub fn new() -> Self {
        Self::with_timeout(crate::env::xdotool_timeout())
    }

    pub fn with_timeout(xdotool_timeout: Duration) -> Self {
        Self {
            xdotool: XDOTOOL.to_string(),
            clipboard_tools: CLIPBOARD_TOOLS
                .iter()
                .map(|argv| argv.iter().map(|a| a.to_string()).collect())
                .collect(),
            xdotool_timeout,
        }
    }

    /// Use a different `xdotool` binary.
    pub fn with_xdotool(mut self, program: impl Into<String>) -> Self {
        self.xdotool = program.into();
        self
    }

    /// Replace the clipboard writers (argv each). Empty disables pasting.
    pub fn with_clipboard_tools(mut self, tools: Vec<Vec<String>>) -> Self {
        self.clipboard_tools = tools;
        self
    }

    async fn xdotool(&self, args: &[&str], timeout: Duration) -> Result<(), ExecutorError> {
        let mut cmd = Command::new(&self.xdotool);
        cmd.args(args);
        let output = run_with_timeout(cmd, timeout, XDOTOOL)
            .await
            .map_err(|e| spawn_error(XDOTOOL, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            tracing::warn!(status = %output.status, stderr, "xdotool failed");
            return Err(ExecutorError::CommandFailed(if stderr.is_empty() {
                format!("{XDOTOOL} exited with {}", output.status)
            } else {
                format!("{XDOTOOL} failed: {stderr}")
            }));
        }
        Ok(())
    }

    /// Put `text` on the clipboard with the first tool that works.
    ///
    /// Returns the tool used, or `None` when no tool could set it.
    async fn copy_to_clipboard(&self, text: &str) -> Option<&str> {
        for argv in &self.clipboard_tools {
            let Some((program, args)) = argv.split_first() else {
                continue;
            };
            let mut cmd = Command::new(program);
            cmd.args(args);
            match pipe_to_stdin(cmd, text.as_bytes(), self.xdotool_timeout, program).await {
                Ok(status) if status.success() => return Some(program.as_str()),
                Ok(status) => tracing::debug!(program, %status, "clipboard tool failed"),
                Err(e) if e.is_not_found() => {}
                Err(e) => tracing::debug!(program, error = %e, "clipboard tool failed"),
            }
        }
        None
    }
}

impl Default for DesktopExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActionExecutor for DesktopExecutor {
    async fn launch_application(&self, argv: &[String]) -> Result<(), ExecutorError> {
        let Some((program, args)) = argv.split_first() else {
            return Err(ExecutorError::SpawnFailed {
                program: String::new(),
                message: "empty command line".to_string(),
            });
        };
        spawn_detached(program, args).map_err(|e| spawn_error(program, e))
    }

    async fn touch_and_open(&self, path: &Path) -> Result<(), ExecutorError> {
        tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await
            .map_err(|source| ExecutorError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        self.open_path(path).await
    }

    async fn open_path(&self, path: &Path) -> Result<(), ExecutorError> {
        spawn_detached(OPENER, [path]).map_err(|e| spawn_error(OPENER, e))
    }

    async fn inject_text(&self, text: &str) -> Result<(), ExecutorError> {
        if let Some(tool) = self.copy_to_clipboard(text).await {
            tracing::debug!(tool, "pasting text from clipboard");
            return self
                .xdotool(&["key", "--", PASTE_CHORD], self.xdotool_timeout)
                .await;
        }

        let delay = TYPE_DELAY.as_millis().to_string();
        // "--" keeps text starting with "-" from being read as an option
        self.xdotool(
            &["type", "--delay", &delay, "--", text],
            typing_timeout(self.xdotool_timeout, text),
        )
        .await
    }

    async fn press_key(&self, key: &str) -> Result<(), ExecutorError> {
        let keysym = keysym(key);
        self.xdotool(&["key", "--", &keysym], self.xdotool_timeout)
            .await
    }

    async fn press_chord(&self, keys: &[String]) -> Result<(), ExecutorError> {
        let chord = keys
            .iter()
            .map(|k| keysym(k))
            .collect::<Vec<_>>()
            .join("+");
        self.xdotool(&["key", "--", &chord], self.xdotool_timeout)
            .await
    }
}

fn spawn_error(program: &str, err: SubprocessError) -> ExecutorError {
    if err.is_not_found() {
        return ExecutorError::MissingDependency(format!(
            "{program} is not installed. Install it and run on an X11 desktop session."
        ));
    }
    match err {
        SubprocessError::Timeout { .. } => ExecutorError::CommandFailed(err.to_string()),
        SubprocessError::Io { source, .. } => ExecutorError::SpawnFailed {
            program: program.to_string(),
            message: source.to_string(),
        },
    }
}

/// Map a friendly key name to an X keysym understood by `xdotool`.
///
/// Unknown names pass through unchanged so raw keysyms keep working.
pub(crate) fn keysym(name: &str) -> String {
    let lower = name.to_ascii_lowercase();
    let mapped = match lower.as_str() {
        "enter" | "return" => "Return",
        "esc" | "escape" => "Escape",
        "tab" => "Tab",
        "space" => "space",
        "backspace" => "BackSpace",
        "delete" | "del" => "Delete",
        "insert" | "ins" => "Insert",
        "home" => "Home",
        "end" => "End",
        "pageup" | "pgup" => "Prior",
        "pagedown" | "pgdn" => "Next",
        "up" => "Up",
        "down" => "Down",
        "left" => "Left",
        "right" => "Right",
        "ctrl" | "control" => "ctrl",
        "shift" => "shift",
        "alt" | "option" => "alt",
        "win" | "super" | "cmd" | "command" | "meta" => "super",
        "capslock" => "Caps_Lock",
        "printscreen" | "prtsc" => "Print",
        _ => "",
    };
    if !mapped.is_empty() {
        return mapped.to_string();
    }
    if is_function_key(&lower) {
        return lower.to_ascii_uppercase();
    }
    if lower.chars().count() == 1 {
        return lower;
    }
    name.to_string()
}

fn is_function_key(name: &str) -> bool {
    name.strip_prefix('f')
        .and_then(|n| n.parse::<u8>().ok())
        .is_some_and(|n| (1..=24).contains(&n))
}

#[cfg(test)]
#[path = "desktop_tests.rs"]
mod tests;
