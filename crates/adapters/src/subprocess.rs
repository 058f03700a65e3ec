// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subprocess execution helpers

use std::ffi::OsStr;
use std::process::{ExitStatus, Output, Stdio};
use std::time::Duration;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Default timeout for a single `xdotool` invocation, before any
/// per-character allowance for typing.
pub const XDOTOOL_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors from running a subprocess
#[derive(Debug, Error)]
pub enum SubprocessError {
    #[error("{description} failed: {source}")]
    Io {
        description: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{description} timed out after {secs}s")]
    Timeout { description: String, secs: u64 },
}

impl SubprocessError {
    /// True when the program itself could not be found on `PATH`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SubprocessError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Run a subprocess command with a timeout.
///
/// Wraps `Command::output()` with `tokio::time::timeout`. The child process
/// is killed if the timeout elapses. A non-zero exit status is not an error
/// here; callers inspect `Output::status`.
pub async fn run_with_timeout(
    mut cmd: Command,
    timeout: Duration,
    description: &str,
) -> Result<Output, SubprocessError> {
    cmd.kill_on_drop(true);
    match tokio::time::timeout(timeout, cmd.output()).await {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(source)) => Err(SubprocessError::Io {
            description: description.to_string(),
            source,
        }),
        Err(_elapsed) => Err(SubprocessError::Timeout {
            description: description.to_string(),
            secs: timeout.as_secs(),
        }),
    }
}

/// Run a command with `input` on its stdin and wait for it to exit.
///
/// Stdout and stderr are discarded rather than captured: clipboard owners
/// such as `xclip` fork a child that keeps serving the selection, and a
/// captured pipe would stay open until that child exits.
pub async fn pipe_to_stdin(
    mut cmd: Command,
    input: &[u8],
    timeout: Duration,
    description: &str,
) -> Result<ExitStatus, SubprocessError> {
    cmd.stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true);
    let io_error = |source| SubprocessError::Io {
        description: description.to_string(),
        source,
    };
    let mut child = cmd.spawn().map_err(io_error)?;

    let run = async {
        if let Some(mut stdin) = child.stdin.take() {
            let written = async {
                stdin.write_all(input).await?;
                stdin.shutdown().await
            };
            // A tool that exits without reading is judged by its status alone
            if let Err(e) = written.await {
                if e.kind() != std::io::ErrorKind::BrokenPipe {
                    return Err(e);
                }
            }
        }
        child.wait().await
    };
    match tokio::time::timeout(timeout, run).await {
        Ok(Ok(status)) => Ok(status),
        Ok(Err(source)) => Err(io_error(source)),
        Err(_elapsed) => Err(SubprocessError::Timeout {
            description: description.to_string(),
            secs: timeout.as_secs(),
        }),
    }
}

/// Start a program without waiting for it.
///
/// Desktop applications outlive the command that opened them, so the child
/// is reaped by a background task and its exit status is only logged.
/// Must be called from within a tokio runtime.
pub fn spawn_detached<I, S>(program: &str, args: I) -> Result<(), SubprocessError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    let mut child = cmd.spawn().map_err(|source| SubprocessError::Io {
        description: program.to_string(),
        source,
    })?;

    let program = program.to_string();
    tokio::spawn(async move {
        match child.wait().await {
            Ok(status) if status.success() => tracing::debug!(program, "detached process exited"),
            Ok(status) => tracing::warn!(program, %status, "detached process exited with failure"),
            Err(e) => tracing::warn!(program, error = %e, "failed to reap detached process"),
        }
    });
    Ok(())
}

#[cfg(test)]
#[path = "subprocess_tests.rs"]
mod tests;
