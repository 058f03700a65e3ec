// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Failure taxonomy for a single command

use thiserror::Error;

/// Usage hint returned for text that matches no known phrasing.
pub const USAGE_HINT: &str = "Unknown command. Examples: 'open browser', 'create file notes.txt', \
     'type hello world', 'press enter', 'hotkey ctrl+s'";

/// Why a command ended in an `Error` event.
///
/// Display renders only the human-readable message; it becomes the event
/// output verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Execution(String),
    #[error("{}", USAGE_HINT)]
    Unrecognized,
}

impl CommandError {
    pub fn validation(message: impl Into<String>) -> Self {
        CommandError::Validation(message.into())
    }

    /// Stable kind name for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            CommandError::Validation(_) => "validation",
            CommandError::NotFound(_) => "not_found",
            CommandError::Execution(_) => "execution",
            CommandError::Unrecognized => "unrecognized",
        }
    }
}
