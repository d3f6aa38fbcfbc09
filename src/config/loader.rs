// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::backends::{Backend, BackendSet};
use crate::config::consts::{DEFAULT_INPUT, DEFAULT_LOG_LEVEL};
use crate::errors::{ConfigError, FailureStrategy};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration.
///
/// Every field is optional; an empty file (or no file at all) runs the default
/// input through every available backend.
///
/// # Fields
/// * `input` - JSON Lines event file (defaults to `sample_detsim.jsonl`)
/// * `evt_max` - Stop after this many events (optional, defaults to all)
/// * `failure_strategy` - What to do when an algorithm fails an event
/// * `backends` - Restrict the numeric backends (optional, defaults to all available)
/// * `log_level` - Default log filter when `RUST_LOG` is unset
///
/// # Example
/// ```yaml
/// input: data/sample_detsim.jsonl
/// evt_max: 10
/// failure_strategy: fail_fast
/// backends: [native, ndarray]
/// log_level: debug
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub input: Option<PathBuf>,
    #[serde(default)]
    pub evt_max: Option<u64>,
    #[serde(default)]
    pub failure_strategy: FailureStrategy,
    #[serde(default)]
    pub backends: Option<Vec<Backend>>,
    #[serde(default)]
    pub log_level: Option<String>,
}

impl AppConfig {
    /// Input path, falling back to the application's default.
    pub fn input_path(&self) -> PathBuf {
        self.input
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT))
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Probe the backends and apply the configured restriction, if any.
    pub fn resolve_backends(&self) -> Result<BackendSet, ConfigError> {
        let probed = BackendSet::probe();
        match &self.backends {
            Some(requested) => probed.restrict(requested),
            None => Ok(probed),
        }
    }
}

/// Load a config from a YAML or TOML file, chosen by extension.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let cfg = match extension {
        "yaml" | "yml" => parse_yaml(&content)?,
        "toml" => toml::from_str(&content)?,
        _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    };
    Ok(cfg)
}

fn parse_yaml(content: &str) -> Result<AppConfig, ConfigError> {
    // An empty YAML document deserializes to unit, not an empty map.
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parse_full_yaml_config() {
        let yaml = r#"
input: data/events.jsonl
evt_max: 5
failure_strategy: fail_fast
backends: [native, rayon]
log_level: debug
"#;

        let cfg: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.input_path(), PathBuf::from("data/events.jsonl"));
        assert_eq!(cfg.evt_max, Some(5));
        assert_eq!(cfg.failure_strategy, FailureStrategy::FailFast);
        assert_eq!(cfg.backends, Some(vec![Backend::Native, Backend::Rayon]));
        assert_eq!(cfg.log_level(), "debug");
    }

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.input_path(), PathBuf::from("sample_detsim.jsonl"));
        assert_eq!(cfg.evt_max, None);
        assert_eq!(cfg.failure_strategy, FailureStrategy::ContinueOnError);
        assert_eq!(cfg.log_level(), "info");
        assert_eq!(cfg.resolve_backends().unwrap(), BackendSet::probe());
    }

    #[test]
    fn test_load_yaml_file() {
        let file = write_temp(".yaml", "evt_max: 2\nbackends: [native]\n");

        let cfg = load_config(file.path()).unwrap();
        assert_eq!(cfg.evt_max, Some(2));
        assert_eq!(cfg.resolve_backends().unwrap(), BackendSet::baseline());
    }

    #[test]
    fn test_load_empty_yaml_file() {
        let file = write_temp(".yml", "");
        let cfg = load_config(file.path()).unwrap();
        assert!(cfg.input.is_none());
    }

    #[test]
    fn test_load_toml_file() {
        let toml = r#"
input = "events.jsonl"
failure_strategy = "fail_fast"
backends = ["native"]
"#;
        let file = write_temp(".toml", toml);

        let cfg = load_config(file.path()).unwrap();
        assert_eq!(cfg.input_path(), PathBuf::from("events.jsonl"));
        assert_eq!(cfg.failure_strategy, FailureStrategy::FailFast);
    }

    #[test]
    fn test_unsupported_extension() {
        let file = write_temp(".ini", "evt_max = 1");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = load_config("/nonexistent/hit-summary.yaml");
        let error_msg = result.unwrap_err().to_string();
        assert!(error_msg.contains("failed to read config"));
    }

    #[test]
    fn test_unknown_backend_rejected() {
        let result: Result<AppConfig, _> = serde_yaml::from_str("backends: [torch]");
        assert!(result.is_err());
    }
}
