// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The single background worker and the gate that starts it once.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use dr_adapters::ActionExecutor;
use dr_core::{Clock, CommandEvent, CommandRequest};
use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::Instrument;

use crate::dispatch::Dispatcher;
use crate::event_log::EventLog;
use crate::queue::CommandQueue;

/// Dequeues commands one at a time and records each terminal outcome.
pub struct Worker<E, C> {
    queue: Arc<CommandQueue>,
    log: Arc<EventLog>,
    dispatcher: Arc<Dispatcher<E>>,
    clock: C,
}

impl<E, C: Clone> Clone for Worker<E, C> {
    fn clone(&self) -> Self {
        Self {
            queue: Arc::clone(&self.queue),
            log: Arc::clone(&self.log),
            dispatcher: Arc::clone(&self.dispatcher),
            clock: self.clock.clone(),
        }
    }
}

impl<E, C> Worker<E, C>
where
    E: ActionExecutor,
    C: Clock,
{
    pub fn new(
        queue: Arc<CommandQueue>,
        log: Arc<EventLog>,
        dispatcher: Arc<Dispatcher<E>>,
        clock: C,
    ) -> Self {
        Self {
            queue,
            log,
            dispatcher,
            clock,
        }
    }

    /// Process commands forever, strictly in queue order.
    pub async fn run(self) {
        tracing::info!("command worker started");
        loop {
            let request = self.queue.dequeue().await;
            self.process(request).await;
            self.queue.task_done();
        }
    }

    /// Attempt one command exactly once and append its terminal event.
    pub async fn process(&self, request: CommandRequest) -> CommandEvent {
        let span = tracing::info_span!(
            "command",
            request_id = request.id.short(8),
            source = %request.source,
        );
        async {
            let event = match self.dispatcher.run(&request.text).await {
                Ok(output) => {
                    tracing::info!(%output, "command succeeded");
                    CommandEvent::success(&request, output, self.clock.timestamp())
                }
                Err(e) => {
                    tracing::warn!(kind = e.kind(), error = %e, "command failed");
                    CommandEvent::error(&request, e.to_string(), self.clock.timestamp())
                }
            };
            self.log.append(event.clone());
            event
        }
        .instrument(span)
        .await
    }
}

/// Launches the worker at most once per process.
///
/// The worker is never restarted; if its task ends, the owner of the
/// [`JoinHandle`] decides what that means for the process.
pub struct WorkerSupervisor<E, C> {
    worker: Worker<E, C>,
    runtime: Handle,
    started: AtomicBool,
    handle: Mutex<Option<JoinHandle<()>>>,
    launches: Arc<AtomicUsize>,
}

impl<E, C> WorkerSupervisor<E, C>
where
    E: ActionExecutor,
    C: Clock,
{
    /// Workers are spawned onto `runtime`, so `ensure_started` may be called
    /// from any thread.
    pub fn new(worker: Worker<E, C>, runtime: Handle) -> Self {
        Self {
            worker,
            runtime,
            started: AtomicBool::new(false),
            handle: Mutex::new(None),
            launches: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Start the worker unless it already was. Returns true for the one call
    /// that launched it.
    pub fn ensure_started(&self) -> bool {
        if self.started.load(Ordering::Acquire) {
            return false;
        }
        let mut handle = self.handle.lock();
        if self.started.load(Ordering::Acquire) {
            return false;
        }

        let worker = self.worker.clone();
        let launches = Arc::clone(&self.launches);
        *handle = Some(self.runtime.spawn(async move {
            launches.fetch_add(1, Ordering::SeqCst);
            worker.run().await;
        }));
        self.started.store(true, Ordering::Release);
        true
    }

    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::Acquire)
    }

    /// Number of worker loops that have begun running.
    pub fn launches(&self) -> usize {
        self.launches.load(Ordering::SeqCst)
    }

    /// Hand the worker task to a watcher. Does not allow a restart.
    pub fn take_handle(&self) -> Option<JoinHandle<()>> {
        self.handle.lock().take()
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod tests;
