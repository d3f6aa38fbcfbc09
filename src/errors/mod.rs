// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod algorithm;
mod application;
mod config;
mod execution;

pub use algorithm::AlgorithmError;
pub use application::ApplicationError;
pub use config::ConfigError;
pub use execution::{ExecutionError, FailureStrategy};
