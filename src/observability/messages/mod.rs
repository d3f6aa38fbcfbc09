// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each type implements `Display` for the human-readable line and
//! [`StructuredLog`] to emit it at its intended level with typed fields.

pub mod algorithm;
pub mod backend;
pub mod task;

use tracing::Span;

/// Emit a message at its own level with structured fields attached.
pub trait StructuredLog {
    fn log(&self);

    /// A span carrying the same fields, for grouping nested events.
    fn span(&self, name: &str) -> Span;
}
