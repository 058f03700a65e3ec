// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command requests and the events recorded about them

use crate::id::RequestId;
use serde::{Deserialize, Serialize};

/// Output recorded on the `Queued` event of every accepted command.
pub const QUEUED_OUTPUT: &str = "Waiting for desktop execution...";

/// A command accepted for execution on the desktop.
///
/// Created on submission and consumed exactly once by the worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    pub id: RequestId,
    pub text: String,
    pub source: String,
}

impl CommandRequest {
    pub fn new(id: RequestId, text: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            source: source.into(),
        }
    }
}

/// Where a command stands when an event about it is recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Queued,
    Success,
    Error,
}

impl EventStatus {
    /// Success and Error never change further.
    pub fn is_terminal(self) -> bool {
        matches!(self, EventStatus::Success | EventStatus::Error)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EventStatus::Queued => "queued",
            EventStatus::Success => "success",
            EventStatus::Error => "error",
        }
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the event log.
///
/// A command produces a `Queued` entry on submission and a separate terminal
/// entry on completion; entries are never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandEvent {
    pub request_id: RequestId,
    pub text: String,
    pub source: String,
    pub status: EventStatus,
    pub output: String,
    pub created_at: String,
}

impl CommandEvent {
    pub fn queued(request: &CommandRequest, created_at: String) -> Self {
        Self::for_request(request, EventStatus::Queued, QUEUED_OUTPUT, created_at)
    }

    pub fn success(request: &CommandRequest, output: impl Into<String>, created_at: String) -> Self {
        Self::for_request(request, EventStatus::Success, output, created_at)
    }

    pub fn error(request: &CommandRequest, output: impl Into<String>, created_at: String) -> Self {
        Self::for_request(request, EventStatus::Error, output, created_at)
    }

    fn for_request(
        request: &CommandRequest,
        status: EventStatus,
        output: impl Into<String>,
        created_at: String,
    ) -> Self {
        Self {
            request_id: request.id.clone(),
            text: request.text.clone(),
            source: request.source.clone(),
            status,
            output: output.into(),
            created_at,
        }
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
