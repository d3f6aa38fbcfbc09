// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::time::Instant;

use crate::errors::{ExecutionError, FailureStrategy};
use crate::observability::messages::task::{EventSkipped, EventStarted, RunCompleted, RunStarted};
use crate::observability::messages::StructuredLog;
use crate::store::{DataStore, NavBuffer};
use crate::traits::{Algorithm, EventSource};

/// Services an algorithm may acquire during `initialize`.
#[derive(Debug, Clone)]
pub struct TaskContext {
    store: DataStore,
    buffer: Option<NavBuffer>,
}

impl TaskContext {
    pub fn new(store: DataStore, buffer: Option<NavBuffer>) -> Self {
        Self { store, buffer }
    }

    /// Handle to the task's data store. Always present.
    pub fn data_store(&self) -> DataStore {
        self.store.clone()
    }

    /// Handle to the event buffer, if a data buffer module attached one.
    pub fn nav_buffer(&self) -> Option<NavBuffer> {
        self.buffer.clone()
    }
}

/// Event counts of a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Events every algorithm executed successfully.
    pub processed: u64,
    /// Events some algorithm failed.
    pub failed: u64,
}

/// Serial run loop driving the algorithm lifecycle.
///
/// ## Execution
///
/// 1. `initialize` every algorithm in registration order; the first failure
///    aborts the run before any event is read
/// 2. For each event from the source, up to `evt_max`: clear the data store,
///    make the event current in the buffer, then `execute` each algorithm in
///    order. An algorithm failure leaves the remaining algorithms unexecuted for
///    that event; the [`FailureStrategy`] decides whether the run goes on
/// 3. `finalize` every algorithm, also after a fail-fast abort
///
/// Algorithm calls are synchronous; only reading from the event source awaits.
pub struct Task {
    name: String,
    store: DataStore,
    buffer: Option<NavBuffer>,
    algorithms: Vec<Box<dyn Algorithm>>,
    source: Option<Box<dyn EventSource>>,
    evt_max: Option<u64>,
    failure_strategy: FailureStrategy,
}

impl Task {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            store: DataStore::new(),
            buffer: None,
            algorithms: Vec::new(),
            source: None,
            evt_max: None,
            failure_strategy: FailureStrategy::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_store(&self) -> DataStore {
        self.store.clone()
    }

    pub fn nav_buffer(&self) -> Option<NavBuffer> {
        self.buffer.clone()
    }

    pub fn set_nav_buffer(&mut self, buffer: NavBuffer) {
        self.buffer = Some(buffer);
    }

    pub fn set_source(&mut self, source: Box<dyn EventSource>) {
        self.source = Some(source);
    }

    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    pub fn set_evt_max(&mut self, evt_max: Option<u64>) {
        self.evt_max = evt_max;
    }

    pub fn set_failure_strategy(&mut self, strategy: FailureStrategy) {
        self.failure_strategy = strategy;
    }

    pub fn add_algorithm(&mut self, algorithm: Box<dyn Algorithm>) {
        self.algorithms.push(algorithm);
    }

    pub fn algorithm_names(&self) -> Vec<&str> {
        self.algorithms.iter().map(|a| a.name()).collect()
    }

    pub fn context(&self) -> TaskContext {
        TaskContext::new(self.store.clone(), self.buffer.clone())
    }

    /// Drive the whole lifecycle over the attached event source.
    pub async fn run(&mut self) -> Result<RunSummary, ExecutionError> {
        let start = Instant::now();
        let mut source = self
            .source
            .take()
            .ok_or_else(|| ExecutionError::NoEventSource(self.name.clone()))?;

        RunStarted {
            task: &self.name,
            source: source.name(),
            algorithm_count: self.algorithms.len(),
            evt_max: self.evt_max,
        }
        .log();

        self.initialize_all()?;

        let mut summary = RunSummary::default();
        let outcome = self.event_loop(source.as_mut(), &mut summary).await;

        if let Some(buffer) = &self.buffer {
            buffer.clear();
        }
        let finalized = self.finalize_all();
        outcome?;
        finalized?;

        RunCompleted {
            task: &self.name,
            processed: summary.processed,
            failed: summary.failed,
            duration: start.elapsed(),
        }
        .log();
        Ok(summary)
    }

    fn initialize_all(&mut self) -> Result<(), ExecutionError> {
        let ctx = self.context();
        for algorithm in self.algorithms.iter_mut() {
            algorithm
                .initialize(&ctx)
                .map_err(|source| ExecutionError::InitializeFailed {
                    algorithm: algorithm.name().to_string(),
                    source,
                })?;
        }
        Ok(())
    }

    async fn event_loop(
        &mut self,
        source: &mut dyn EventSource,
        summary: &mut RunSummary,
    ) -> Result<(), ExecutionError> {
        let mut event: u64 = 0;
        loop {
            if self.evt_max.is_some_and(|max| event >= max) {
                break;
            }
            let Some(nav) = source.next_event().await? else {
                break;
            };

            self.store.clear();
            if let Some(buffer) = &self.buffer {
                buffer.set_current(nav);
            }

            match self.execute_event(event) {
                Ok(()) => summary.processed += 1,
                Err(e) => match self.failure_strategy {
                    FailureStrategy::FailFast => return Err(e),
                    FailureStrategy::ContinueOnError => summary.failed += 1,
                },
            }
            event += 1;
        }
        Ok(())
    }

    fn execute_event(&mut self, event: u64) -> Result<(), ExecutionError> {
        let started = EventStarted {
            task: &self.name,
            event,
        };
        let span = started.span("event_execution");
        let _guard = span.enter();
        started.log();

        for algorithm in self.algorithms.iter_mut() {
            if let Err(source) = algorithm.execute() {
                if self.failure_strategy == FailureStrategy::ContinueOnError {
                    EventSkipped {
                        event,
                        algorithm: algorithm.name(),
                    }
                    .log();
                }
                return Err(ExecutionError::ExecuteFailed {
                    algorithm: algorithm.name().to_string(),
                    event,
                    source,
                });
            }
        }
        Ok(())
    }

    /// Finalize every algorithm, reporting the first failure.
    fn finalize_all(&mut self) -> Result<(), ExecutionError> {
        let mut first_error = None;
        for algorithm in self.algorithms.iter_mut() {
            if let Err(source) = algorithm.finalize() {
                first_error.get_or_insert(ExecutionError::FinalizeFailed {
                    algorithm: algorithm.name().to_string(),
                    source,
                });
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

impl std::fmt::Debug for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Task")
            .field("name", &self.name)
            .field("algorithms", &self.algorithm_names())
            .field("has_source", &self.source.is_some())
            .field("has_nav_buffer", &self.buffer.is_some())
            .field("evt_max", &self.evt_max)
            .field("failure_strategy", &self.failure_strategy)
            .finish()
    }
}
