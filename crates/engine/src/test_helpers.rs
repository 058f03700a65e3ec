// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for the engine crate.

use crate::{CommandService, ServiceConfig};
use dr_adapters::FakeActionExecutor;
use dr_core::{CommandEvent, EventStatus, FakeClock, SequentialIdGen};
use std::path::PathBuf;
use std::time::Duration;

/// Convenience alias for the fully-typed test service.
pub(crate) type TestService = CommandService<FakeActionExecutor, FakeClock, SequentialIdGen>;

/// Test context holding the service, its fakes, and a scratch home directory.
pub(crate) struct TestContext {
    pub service: TestService,
    pub executor: FakeActionExecutor,
    pub clock: FakeClock,
    pub home: PathBuf,
    _home_dir: tempfile::TempDir,
}

pub(crate) fn setup() -> TestContext {
    let home_dir = tempfile::tempdir().unwrap();
    let home = home_dir.path().to_path_buf();
    let executor = FakeActionExecutor::new();
    let clock = FakeClock::new();
    let service = CommandService::new(
        executor.clone(),
        clock.clone(),
        SequentialIdGen::new("req"),
        ServiceConfig::new(&home),
    )
    .unwrap();

    TestContext {
        service,
        executor,
        clock,
        home,
        _home_dir: home_dir,
    }
}

impl TestContext {
    /// Wait for the worker to finish everything queued so far.
    pub async fn drain(&self) {
        tokio::time::timeout(Duration::from_secs(5), self.service.drain())
            .await
            .unwrap();
    }

    /// Events oldest first, for reading in causal order.
    pub fn events_in_order(&self) -> Vec<CommandEvent> {
        let mut events = self.service.read_logs();
        events.reverse();
        events
    }
}

pub(crate) fn statuses(events: &[CommandEvent]) -> Vec<EventStatus> {
    events.iter().map(|e| e.status).collect()
}
