// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the run loop and application wiring.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A module attached itself to the task.
///
/// # Log Level
/// `debug!`
pub struct ModuleInitialized<'a> {
    pub module: &'a str,
}

impl Display for ModuleInitialized<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Module '{}' initialized", self.module)
    }
}

impl StructuredLog for ModuleInitialized<'_> {
    fn log(&self) {
        tracing::debug!(module = self.module, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("module", span_name = name, module = self.module)
    }
}

/// Numeric backends resolved for this process.
///
/// # Log Level
/// `info!`
pub struct BackendsResolved<'a> {
    pub backends: &'a [&'a str],
}

impl Display for BackendsResolved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Numeric backends: [{}]", self.backends.join(", "))
    }
}

impl StructuredLog for BackendsResolved<'_> {
    fn log(&self) {
        tracing::info!(backends = self.backends.join(","), "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("backends", span_name = name, backends = self.backends.join(","))
    }
}

/// Run loop starting.
///
/// # Log Level
/// `info!`
pub struct RunStarted<'a> {
    pub task: &'a str,
    pub source: &'a str,
    pub algorithm_count: usize,
    pub evt_max: Option<u64>,
}

impl Display for RunStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Task '{}' starting: source={}, algorithms={}, evt_max={}",
            self.task,
            self.source,
            self.algorithm_count,
            self.evt_max.map_or_else(|| "all".to_string(), |n| n.to_string())
        )
    }
}

impl StructuredLog for RunStarted<'_> {
    fn log(&self) {
        tracing::info!(
            task = self.task,
            source = self.source,
            algorithm_count = self.algorithm_count,
            evt_max = ?self.evt_max,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "run",
            span_name = name,
            task = self.task,
            source = self.source,
            algorithm_count = self.algorithm_count,
        )
    }
}

/// Run loop finished.
///
/// # Log Level
/// `info!`
pub struct RunCompleted<'a> {
    pub task: &'a str,
    pub processed: u64,
    pub failed: u64,
    pub duration: std::time::Duration,
}

impl Display for RunCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Task '{}' completed: {} events processed, {} failed in {:?}",
            self.task, self.processed, self.failed, self.duration
        )
    }
}

impl StructuredLog for RunCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            task = self.task,
            processed = self.processed,
            failed = self.failed,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "run_completed",
            span_name = name,
            task = self.task,
            processed = self.processed,
            failed = self.failed,
        )
    }
}

/// An event entered the algorithm chain.
///
/// Its span wraps every message logged while the event executes.
///
/// # Log Level
/// `debug!`
pub struct EventStarted<'a> {
    pub task: &'a str,
    pub event: u64,
}

impl Display for EventStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Event {} started in task '{}'", self.event, self.task)
    }
}

impl StructuredLog for EventStarted<'_> {
    fn log(&self) {
        tracing::debug!(task = self.task, event = self.event, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("event", span_name = name, task = self.task, event = self.event)
    }
}

/// An event was left unprocessed and the run continues.
///
/// # Log Level
/// `warn!`
pub struct EventSkipped<'a> {
    pub event: u64,
    pub algorithm: &'a str,
}

impl Display for EventSkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Event {} skipped after algorithm '{}' failed",
            self.event, self.algorithm
        )
    }
}

impl StructuredLog for EventSkipped<'_> {
    fn log(&self) {
        tracing::warn!(event = self.event, algorithm = self.algorithm, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "event_skipped",
            span_name = name,
            event = self.event,
            algorithm = self.algorithm,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_run_started_without_limit() {
        let msg = RunStarted {
            task: "top",
            source: "sample.jsonl",
            algorithm_count: 2,
            evt_max: None,
        };
        assert_eq!(
            msg.to_string(),
            "Task 'top' starting: source=sample.jsonl, algorithms=2, evt_max=all"
        );
    }

    #[test]
    fn test_run_completed_counts() {
        let msg = RunCompleted {
            task: "top",
            processed: 3,
            failed: 1,
            duration: Duration::from_millis(5),
        };
        assert!(msg.to_string().contains("3 events processed, 1 failed"));
    }

    #[test]
    fn test_event_started() {
        let msg = EventStarted { task: "top", event: 4 };
        assert_eq!(msg.to_string(), "Event 4 started in task 'top'");
    }

    #[test]
    fn test_backends_resolved_lists_names() {
        let names = ["native", "rayon"];
        let msg = BackendsResolved { backends: &names };
        assert_eq!(msg.to_string(), "Numeric backends: [native, rayon]");
    }
}
