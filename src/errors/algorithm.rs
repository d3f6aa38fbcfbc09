// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised by algorithms from inside their lifecycle calls.

use thiserror::Error;

/// Failure of a single lifecycle call.
///
/// A failed `execute` marks the current event as unprocessed; what happens next
/// is decided by the run loop's [`FailureStrategy`](crate::errors::FailureStrategy).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmError {
    /// A required array was not present in the data store for this event.
    #[error("array {field} not found.")]
    MissingField { field: &'static str },

    /// A service the algorithm needs was not attached to the task.
    #[error("cannot get the {service} service")]
    ServiceUnavailable { service: &'static str },

    /// The event buffer holds no current event.
    #[error("Failed to find the event navigator.")]
    NavigatorMissing,

    /// The current event carries no simulation header.
    #[error("Failed to find the SimHeader.")]
    SimHeaderMissing,

    /// A backend was asked to compute without its library compiled in.
    #[error("backend {backend} is not available in this build")]
    BackendUnavailable { backend: &'static str },

    /// The simulation header carries no event.
    #[error("Failed to find the SimEvent.")]
    SimEventMissing,
}
