// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory FIFO of pending command requests.
//!
//! Many producers enqueue without blocking; the worker awaits `dequeue()`,
//! which suspends the task (no polling) until an item arrives. The queue is
//! unbounded and not persisted.

use std::collections::VecDeque;

use dr_core::CommandRequest;
use parking_lot::Mutex;
use tokio::sync::Notify;

struct QueueState {
    items: VecDeque<CommandRequest>,
    /// Enqueued but not yet marked done (includes the item being processed)
    unfinished: usize,
}

pub struct CommandQueue {
    state: Mutex<QueueState>,
    available: Notify,
    idle: Notify,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(QueueState {
                items: VecDeque::new(),
                unfinished: 0,
            }),
            available: Notify::new(),
            idle: Notify::new(),
        }
    }

    /// Append to the tail. Never blocks beyond the short critical section.
    pub fn enqueue(&self, request: CommandRequest) {
        {
            let mut state = self.state.lock();
            state.items.push_back(request);
            state.unfinished += 1;
        }
        self.available.notify_one();
    }

    /// Wait for and remove the oldest request.
    pub async fn dequeue(&self) -> CommandRequest {
        loop {
            let notified = self.available.notified();
            tokio::pin!(notified);
            // Register before checking so an enqueue between the check and
            // the await still wakes this task
            notified.as_mut().enable();
            let next = self.state.lock().items.pop_front();
            if let Some(request) = next {
                return request;
            }
            notified.await;
        }
    }

    /// Mark one dequeued request as fully processed.
    pub fn task_done(&self) {
        let drained = {
            let mut state = self.state.lock();
            state.unfinished = state.unfinished.saturating_sub(1);
            state.unfinished == 0
        };
        if drained {
            self.idle.notify_waiters();
        }
    }

    /// Resolve once every enqueued request has been marked done.
    pub async fn join(&self) {
        loop {
            let notified = self.idle.notified();
            tokio::pin!(notified);
            // Register before checking so a concurrent task_done is not missed
            notified.as_mut().enable();
            if self.unfinished() == 0 {
                return;
            }
            notified.await;
        }
    }

    /// Requests waiting to be dequeued.
    pub fn len(&self) -> usize {
        self.state.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Requests not yet marked done, including one in progress.
    pub fn unfinished(&self) -> usize {
        self.state.lock().unfinished
    }
}

impl Default for CommandQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
