// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrapper for consistent observability

use crate::executor::{ActionExecutor, ExecutorError};
use async_trait::async_trait;
use std::future::Future;
use std::path::Path;
use tracing::Instrument;

/// Wrapper that adds tracing to any ActionExecutor
#[derive(Clone)]
pub struct TracedExecutor<E> {
    inner: E,
}

impl<E> TracedExecutor<E> {
    pub fn new(inner: E) -> Self {
        Self { inner }
    }
}

/// Time a call and log its outcome inside the current span.
async fn timed<F>(fut: F) -> Result<(), ExecutorError>
where
    F: Future<Output = Result<(), ExecutorError>>,
{
    let start = std::time::Instant::now();
    let result = fut.await;
    let elapsed_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(()) => tracing::info!(elapsed_ms, "done"),
        Err(e) => tracing::error!(elapsed_ms, error = %e, "failed"),
    }
    result
}

#[async_trait]
impl<E: ActionExecutor> ActionExecutor for TracedExecutor<E> {
    async fn launch_application(&self, argv: &[String]) -> Result<(), ExecutorError> {
        let program = argv.first().map(String::as_str).unwrap_or_default();
        timed(self.inner.launch_application(argv))
            .instrument(tracing::info_span!("executor.launch", program))
            .await
    }

    async fn touch_and_open(&self, path: &Path) -> Result<(), ExecutorError> {
        timed(self.inner.touch_and_open(path))
            .instrument(tracing::info_span!("executor.touch_and_open", path = %path.display()))
            .await
    }

    async fn open_path(&self, path: &Path) -> Result<(), ExecutorError> {
        timed(self.inner.open_path(path))
            .instrument(tracing::info_span!("executor.open_path", path = %path.display()))
            .await
    }

    async fn inject_text(&self, text: &str) -> Result<(), ExecutorError> {
        // Length only; typed text may be sensitive
        let chars = text.chars().count();
        timed(self.inner.inject_text(text))
            .instrument(tracing::info_span!("executor.inject_text", chars))
            .await
    }

    async fn press_key(&self, key: &str) -> Result<(), ExecutorError> {
        timed(self.inner.press_key(key))
            .instrument(tracing::info_span!("executor.press_key", key))
            .await
    }

    async fn press_chord(&self, keys: &[String]) -> Result<(), ExecutorError> {
        let chord = keys.join("+");
        timed(self.inner.press_chord(keys))
            .instrument(tracing::info_span!("executor.press_chord", chord = %chord))
            .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
