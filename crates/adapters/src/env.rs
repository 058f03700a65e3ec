// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the adapters crate.

use std::time::Duration;

fn parse_duration_ms(var: &str) -> Option<Duration> {
    std::env::var(var)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
}

/// Base bound on an `xdotool` invocation (default: 10000ms). Typing adds a per-character allowance.
pub fn xdotool_timeout() -> Duration {
    parse_duration_ms("DR_XDOTOOL_TIMEOUT_MS").unwrap_or(crate::subprocess::XDOTOOL_TIMEOUT)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
