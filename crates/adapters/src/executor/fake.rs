// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake action executor for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ActionExecutor, ExecutorError};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Recorded executor call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutorCall {
    Launch { argv: Vec<String> },
    TouchAndOpen { path: PathBuf },
    OpenPath { path: PathBuf },
    InjectText { text: String },
    PressKey { key: String },
    PressChord { keys: Vec<String> },
}

struct FakeExecutorState {
    calls: Vec<ExecutorCall>,
    failure: Option<String>,
}

/// Fake executor that records calls and optionally fails them
#[derive(Clone)]
pub struct FakeActionExecutor {
    inner: Arc<Mutex<FakeExecutorState>>,
}

impl Default for FakeActionExecutor {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeExecutorState {
                calls: Vec::new(),
                failure: None,
            })),
        }
    }
}

impl FakeActionExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ExecutorCall> {
        self.inner.lock().calls.clone()
    }

    /// Make every subsequent call fail with `message`
    pub fn fail_with(&self, message: impl Into<String>) {
        self.inner.lock().failure = Some(message.into());
    }

    /// Stop injecting failures
    pub fn succeed(&self) {
        self.inner.lock().failure = None;
    }

    fn record(&self, call: ExecutorCall) -> Result<(), ExecutorError> {
        let mut inner = self.inner.lock();
        inner.calls.push(call);
        match &inner.failure {
            Some(message) => Err(ExecutorError::CommandFailed(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ActionExecutor for FakeActionExecutor {
    async fn launch_application(&self, argv: &[String]) -> Result<(), ExecutorError> {
        self.record(ExecutorCall::Launch {
            argv: argv.to_vec(),
        })
    }

    async fn touch_and_open(&self, path: &Path) -> Result<(), ExecutorError> {
        self.record(ExecutorCall::TouchAndOpen {
            path: path.to_path_buf(),
        })
    }

    async fn open_path(&self, path: &Path) -> Result<(), ExecutorError> {
        self.record(ExecutorCall::OpenPath {
            path: path.to_path_buf(),
        })
    }

    async fn inject_text(&self, text: &str) -> Result<(), ExecutorError> {
        self.record(ExecutorCall::InjectText {
            text: text.to_string(),
        })
    }

    async fn press_key(&self, key: &str) -> Result<(), ExecutorError> {
        self.record(ExecutorCall::PressKey {
            key: key.to_string(),
        })
    }

    async fn press_chord(&self, keys: &[String]) -> Result<(), ExecutorError> {
        self.record(ExecutorCall::PressChord {
            keys: keys.to_vec(),
        })
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
