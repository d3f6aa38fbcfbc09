// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging.
//!
//! Log lines are built from message structs that implement `Display`, so the
//! wording of every event lives in one place:
//!
//! * `messages::algorithm` - lifecycle and per-event algorithm events
//! * `messages::backend` - numeric backend results
//! * `messages::task` - run loop and application wiring events
//!
//! # Usage
//!
//! ```rust
//! use hit_summary::observability::messages::algorithm::MissingField;
//! use hit_summary::observability::messages::StructuredLog;
//!
//! MissingField { algorithm: "hit_summary", field: "pmtid" }.log();
//! ```

pub mod messages;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_level` applies.
pub fn init_tracing(default_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second install (tests, embedding) is not an error worth surfacing.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
