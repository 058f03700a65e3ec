// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! dr-core: data model and command interpretation for deskrelay

pub mod action;
pub mod clock;
pub mod command;
pub mod error;
pub mod id;
pub mod interpret;
pub mod launcher;

pub use action::{Action, App, Shortcut};
pub use clock::{Clock, SystemClock, TIMESTAMP_FORMAT};
pub use command::{CommandEvent, CommandRequest, EventStatus, QUEUED_OUTPUT};
pub use error::{CommandError, USAGE_HINT};
pub use id::{IdGen, RequestId, SequentialIdGen, UuidIdGen};
pub use interpret::{sanitize_file_name, Interpreter};
pub use launcher::Launchers;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use clock::FakeClock;
