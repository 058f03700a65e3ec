// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide command service.
//!
//! Owns the queue, the event log and the worker gate. Constructed once at
//! startup and shared with the request handlers; there is no ambient global
//! state.

use std::path::PathBuf;
use std::sync::Arc;

use dr_adapters::ActionExecutor;
use dr_core::{
    Clock, CommandEvent, CommandRequest, IdGen, Interpreter, Launchers, RequestId,
};
use serde::Serialize;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::dispatch::Dispatcher;
use crate::error::{EngineError, SubmitError};
use crate::event_log::{EventLog, MAX_LOG};
use crate::queue::CommandQueue;
use crate::worker::{Worker, WorkerSupervisor};

/// Source recorded when the submitter does not name one.
pub const DEFAULT_SOURCE: &str = "phone";

/// Service configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Root for `create file` targets and `~` expansion
    pub home: PathBuf,
    /// Argv table for launch actions
    pub launchers: Launchers,
    /// Maximum number of retained log events
    pub log_capacity: usize,
}

impl ServiceConfig {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        Self {
            launchers: Launchers::for_home(&home),
            home,
            log_capacity: MAX_LOG,
        }
    }
}

/// Acknowledgement that a command was queued
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submitted {
    pub request_id: RequestId,
    pub text: String,
}

/// Queue and worker status for health reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Health {
    pub queue_depth: usize,
    pub worker_started: bool,
}

pub struct CommandService<E, C, G> {
    queue: Arc<CommandQueue>,
    log: Arc<EventLog>,
    supervisor: WorkerSupervisor<E, C>,
    clock: C,
    ids: G,
}

impl<E, C, G> CommandService<E, C, G>
where
    E: ActionExecutor,
    C: Clock,
    G: IdGen,
{
    /// Must be called from within a tokio runtime; the worker is spawned
    /// onto that runtime when first needed.
    pub fn new(executor: E, clock: C, ids: G, config: ServiceConfig) -> Result<Self, EngineError> {
        let runtime = Handle::try_current()?;
        let queue = Arc::new(CommandQueue::new());
        let log = Arc::new(EventLog::with_capacity(config.log_capacity));
        let dispatcher = Dispatcher::new(
            Interpreter::new(config.home),
            config.launchers,
            executor,
        );
        let worker = Worker::new(
            Arc::clone(&queue),
            Arc::clone(&log),
            Arc::new(dispatcher),
            clock.clone(),
        );

        Ok(Self {
            queue,
            log,
            supervisor: WorkerSupervisor::new(worker, runtime),
            clock,
            ids,
        })
    }

    /// Accept a command for asynchronous execution.
    ///
    /// The `Queued` event is logged before the request becomes visible to
    /// the worker, so it always precedes the terminal event.
    pub fn submit(&self, text: &str, source: &str) -> Result<Submitted, SubmitError> {
        self.ensure_worker_started();

        let text = text.trim();
        if text.is_empty() {
            return Err(SubmitError::EmptyText);
        }
        let source = match source.trim() {
            "" => DEFAULT_SOURCE,
            s => s,
        };

        let request = CommandRequest::new(RequestId::new(self.ids.next()), text, source);
        tracing::info!(request_id = %request.id, source, text, "command queued");

        self.log
            .append(CommandEvent::queued(&request, self.clock.timestamp()));
        let submitted = Submitted {
            request_id: request.id.clone(),
            text: request.text.clone(),
        };
        self.queue.enqueue(request);
        Ok(submitted)
    }

    /// All retained events, newest first.
    pub fn read_logs(&self) -> Vec<CommandEvent> {
        self.ensure_worker_started();
        self.log.snapshot()
    }

    pub fn health(&self) -> Health {
        self.ensure_worker_started();
        Health {
            queue_depth: self.queue.len(),
            worker_started: self.supervisor.is_started(),
        }
    }

    /// Idempotent; safe to call from any number of threads.
    pub fn ensure_worker_started(&self) -> bool {
        let launched = self.supervisor.ensure_started();
        if launched {
            tracing::info!("launched command worker");
        }
        launched
    }

    /// Wait until every queued command has reached a terminal event.
    pub async fn drain(&self) {
        self.queue.join().await;
    }

    /// Commands queued or in progress.
    pub fn pending(&self) -> usize {
        self.queue.unfinished()
    }

    /// Hand the worker task to the process for fatal-exit monitoring.
    pub fn take_worker_handle(&self) -> Option<JoinHandle<()>> {
        self.supervisor.take_handle()
    }

    pub fn worker_launches(&self) -> usize {
        self.supervisor.launches()
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
