// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! deskrelay daemon library
//!
//! HTTP surface, authorization and configuration for the `drd` binary.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod auth;
pub mod banner;
pub mod config;
mod env;
pub mod http;

pub use auth::TokenAuth;
pub use config::{Config, DaemonError};
pub use http::{router, AppState};
