// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon configuration and startup errors.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use dr_core::Launchers;
use dr_engine::{EngineError, ServiceConfig};
use thiserror::Error;

use crate::env;

/// Errors that abort daemon startup or shutdown
#[derive(Debug, Error)]
pub enum DaemonError {
    #[error("Could not determine state directory")]
    NoStateDir,

    #[error("Could not determine home directory; set DR_HOME")]
    NoHomeDir,

    #[error("Invalid PORT value: {0:?}")]
    InvalidPort(String),

    #[error("Failed to bind {0}: {1}")]
    BindFailed(SocketAddr, std::io::Error),

    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Daemon configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Root state directory (e.g. ~/.local/state/deskrelay)
    pub state_dir: PathBuf,
    /// Path to daemon log file
    pub log_path: PathBuf,
    /// HTTP port, bound on all interfaces
    pub port: u16,
    /// Shared secret required from remote clients, if any
    pub api_token: Option<String>,
    /// Root for created files and `~` expansion
    pub home: PathBuf,
    pub browser_url: String,
    pub editor: String,
}

impl Config {
    /// Load configuration from the environment.
    pub fn load() -> Result<Self, DaemonError> {
        let state_dir = env::state_dir()?;
        Ok(Self {
            log_path: state_dir.join("drd.log"),
            state_dir,
            port: env::port()?,
            api_token: env::api_token(),
            home: env::home_dir()?,
            browser_url: env::browser_url(),
            editor: env::editor(),
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    pub fn service_config(&self) -> ServiceConfig {
        let mut config = ServiceConfig::new(&self.home);
        config.launchers = Launchers::new(&self.home, &self.browser_url, &self.editor);
        config
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
