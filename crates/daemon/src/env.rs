// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the daemon crate.

use std::path::PathBuf;

use dr_core::launcher::{DEFAULT_BROWSER_URL, DEFAULT_EDITOR};

use crate::config::DaemonError;

pub const DEFAULT_PORT: u16 = 5000;

fn non_blank(var: &str) -> Option<String> {
    std::env::var(var)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Resolve state directory: DR_STATE_DIR > XDG_STATE_HOME/deskrelay > ~/.local/state/deskrelay
pub fn state_dir() -> Result<PathBuf, DaemonError> {
    if let Some(dir) = non_blank("DR_STATE_DIR") {
        return Ok(PathBuf::from(dir));
    }
    if let Some(xdg) = non_blank("XDG_STATE_HOME") {
        return Ok(PathBuf::from(xdg).join("deskrelay"));
    }
    let home = dirs::home_dir().ok_or(DaemonError::NoStateDir)?;
    Ok(home.join(".local/state/deskrelay"))
}

/// Root for created files and `~` expansion: DR_HOME > the user's home.
pub fn home_dir() -> Result<PathBuf, DaemonError> {
    match non_blank("DR_HOME") {
        Some(dir) => Ok(PathBuf::from(dir)),
        None => dirs::home_dir().ok_or(DaemonError::NoHomeDir),
    }
}

pub fn port() -> Result<u16, DaemonError> {
    match non_blank("PORT") {
        Some(raw) => raw.parse().map_err(|_| DaemonError::InvalidPort(raw)),
        None => Ok(DEFAULT_PORT),
    }
}

/// Shared secret for remote requests. Blank is treated as unset.
pub fn api_token() -> Option<String> {
    non_blank("REMOTE_API_TOKEN")
}

pub fn browser_url() -> String {
    non_blank("DR_BROWSER_URL").unwrap_or_else(|| DEFAULT_BROWSER_URL.to_string())
}

pub fn editor() -> String {
    non_blank("DR_EDITOR").unwrap_or_else(|| DEFAULT_EDITOR.to_string())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
