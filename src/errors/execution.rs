// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use thiserror::Error;

use crate::errors::AlgorithmError;

/// How the run loop reacts to an algorithm failing `execute`.
///
/// # Example
/// ```yaml
/// failure_strategy: fail_fast
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FailureStrategy {
    /// Abort the run on the first failed event.
    FailFast,
    /// Skip the rest of the failed event and carry on with the next one.
    #[default]
    ContinueOnError,
}

/// Errors that stop a run.
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("algorithm '{algorithm}' failed to initialize: {source}")]
    InitializeFailed {
        algorithm: String,
        #[source]
        source: AlgorithmError,
    },

    #[error("algorithm '{algorithm}' failed on event {event}: {source}")]
    ExecuteFailed {
        algorithm: String,
        event: u64,
        #[source]
        source: AlgorithmError,
    },

    #[error("algorithm '{algorithm}' failed to finalize: {source}")]
    FinalizeFailed {
        algorithm: String,
        #[source]
        source: AlgorithmError,
    },

    /// The task was started without an event source attached.
    #[error("no event source attached to task '{0}'")]
    NoEventSource(String),

    /// The event source could not be read.
    #[error("input error: {0}")]
    Io(#[from] std::io::Error),

    /// An input record could not be decoded.
    #[error("cannot decode event at line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}
