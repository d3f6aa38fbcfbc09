// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading configuration or wiring modules.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML configuration did not parse.
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML configuration did not parse.
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// The file extension maps to no known config format.
    #[error("unsupported config format for '{0}' (expected .yaml, .yml or .toml)")]
    UnsupportedFormat(PathBuf),

    /// None of the requested backends is available in this build.
    #[error("no numeric backend left after applying {requested:?} to available {available:?}")]
    EmptyBackendSet {
        requested: Vec<String>,
        available: Vec<String>,
    },

    /// A module could not attach itself to the task.
    #[error("module '{module}' failed to initialize: {reason}")]
    ModuleInit { module: String, reason: String },
}
