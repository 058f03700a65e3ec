// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Action executors: the side effects behind recognized commands

mod desktop;

pub use desktop::DesktopExecutor;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{ExecutorCall, FakeActionExecutor};

use async_trait::async_trait;
use dr_core::CommandError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from executor operations
#[derive(Debug, Error)]
pub enum ExecutorError {
    #[error("{0}")]
    MissingDependency(String),
    #[error("failed to start {program}: {message}")]
    SpawnFailed { program: String, message: String },
    #[error("{0}")]
    CommandFailed(String),
    #[error("cannot create {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<ExecutorError> for CommandError {
    fn from(err: ExecutorError) -> Self {
        CommandError::Execution(err.to_string())
    }
}

/// Performs desktop side effects on the host.
///
/// Every call may fail; the failure message ends up as the output of the
/// command's `Error` event.
#[async_trait]
pub trait ActionExecutor: Clone + Send + Sync + 'static {
    /// Start an application from a fixed argv without waiting for it
    async fn launch_application(&self, argv: &[String]) -> Result<(), ExecutorError>;

    /// Create `path` if it does not exist (never truncating), then open it
    async fn touch_and_open(&self, path: &Path) -> Result<(), ExecutorError>;

    /// Open an existing path with the desktop's default handler
    async fn open_path(&self, path: &Path) -> Result<(), ExecutorError>;

    /// Type text into the focused window
    async fn inject_text(&self, text: &str) -> Result<(), ExecutorError>;

    /// Press and release a single named key
    async fn press_key(&self, key: &str) -> Result<(), ExecutorError>;

    /// Press the keys together, in order, then release them
    async fn press_chord(&self, keys: &[String]) -> Result<(), ExecutorError>;
}
