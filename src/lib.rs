// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod algorithms;     // lifecycle implementations
pub mod backends;       // numeric backends
pub mod config;         // app config
pub mod engine;         // task run loop + application
pub mod errors;         // error handling
pub mod input;          // event sources
pub mod modules;        // pipeline wiring
pub mod observability;
pub mod store;          // data store + event buffer
pub mod traits;         // unified abstractions

#[cfg(test)]
mod test_support;
