// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for algorithm lifecycle and per-event processing.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A required array is absent from the data store.
///
/// # Log Level
/// `error!` - the event is not processed
pub struct MissingField<'a> {
    pub algorithm: &'a str,
    pub field: &'a str,
}

impl Display for MissingField<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "array {} not found.", self.field)
    }
}

impl StructuredLog for MissingField<'_> {
    fn log(&self) {
        tracing::error!(algorithm = self.algorithm, field = self.field, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "missing_field",
            span_name = name,
            algorithm = self.algorithm,
            field = self.field,
        )
    }
}

/// A service could not be obtained from the task during initialization.
///
/// # Log Level
/// `error!` - the run cannot start
pub struct ServiceUnavailable<'a> {
    pub algorithm: &'a str,
    pub service: &'a str,
}

impl Display for ServiceUnavailable<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "cannot get the {} service", self.service)
    }
}

impl StructuredLog for ServiceUnavailable<'_> {
    fn log(&self) {
        tracing::error!(algorithm = self.algorithm, service = self.service, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "service_unavailable",
            span_name = name,
            algorithm = self.algorithm,
            service = self.service,
        )
    }
}

/// The current event could not be resolved down to a simulated event.
///
/// # Log Level
/// `error!` - the event is not processed
pub struct EventUnresolved<'a> {
    pub algorithm: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for EventUnresolved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl StructuredLog for EventUnresolved<'_> {
    fn log(&self) {
        tracing::error!(algorithm = self.algorithm, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("event_unresolved", span_name = name, algorithm = self.algorithm)
    }
}

/// Identifier of the simulated event being converted.
///
/// # Log Level
/// `info!`
pub struct SimEventId {
    pub event_id: u64,
}

impl Display for SimEventId {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "The SimEvent ID: {}", self.event_id)
    }
}

impl StructuredLog for SimEventId {
    fn log(&self) {
        tracing::info!(event_id = self.event_id, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("sim_event", span_name = name, event_id = self.event_id)
    }
}

/// Event has no hits and is passed through untouched.
///
/// # Log Level
/// `info!`
pub struct EmptyHitCollection {
    pub event_id: u64,
}

impl Display for EmptyHitCollection {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Skip the event due to empty collection.")
    }
}

impl StructuredLog for EmptyHitCollection {
    fn log(&self) {
        tracing::info!(event_id = self.event_id, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("empty_collection", span_name = name, event_id = self.event_id)
    }
}

/// Hit arrays were written to the data store.
///
/// # Log Level
/// `info!`
pub struct RegisteredToStore {
    pub event_id: u64,
    pub hit_count: usize,
}

impl Display for RegisteredToStore {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Register the value to DataStore: {} hits",
            self.hit_count
        )
    }
}

impl StructuredLog for RegisteredToStore {
    fn log(&self) {
        tracing::info!(event_id = self.event_id, hit_count = self.hit_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "registered",
            span_name = name,
            event_id = self.event_id,
            hit_count = self.hit_count,
        )
    }
}
