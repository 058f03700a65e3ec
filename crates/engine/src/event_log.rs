// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded, append-only history of command events.

use std::collections::VecDeque;

use dr_core::CommandEvent;
use parking_lot::Mutex;

/// Maximum number of events retained.
pub const MAX_LOG: usize = 100;

/// Thread-safe event history with oldest-first eviction.
///
/// Stored in insertion order; read newest first through [`EventLog::snapshot`].
pub struct EventLog {
    entries: Mutex<VecDeque<CommandEvent>>,
    capacity: usize,
}

impl EventLog {
    pub fn new() -> Self {
        Self::with_capacity(MAX_LOG)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity.saturating_add(1))),
            capacity,
        }
    }

    /// Append, evicting the single oldest entry once over capacity.
    pub fn append(&self, event: CommandEvent) {
        let mut entries = self.entries.lock();
        entries.push_back(event);
        if entries.len() > self.capacity {
            entries.pop_front();
        }
    }

    /// Owned copy of all entries, most recent first.
    pub fn snapshot(&self) -> Vec<CommandEvent> {
        self.entries.lock().iter().rev().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "event_log_tests.rs"]
mod tests;
