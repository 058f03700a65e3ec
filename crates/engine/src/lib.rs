// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! deskrelay command execution engine

mod dispatch;
mod error;
pub mod event_log;
pub mod queue;
mod service;
mod worker;

#[cfg(test)]
mod test_helpers;

pub use dispatch::Dispatcher;
pub use error::{EngineError, SubmitError};
pub use event_log::{EventLog, MAX_LOG};
pub use queue::CommandQueue;
pub use service::{CommandService, Health, ServiceConfig, Submitted, DEFAULT_SOURCE};
pub use worker::{Worker, WorkerSupervisor};
