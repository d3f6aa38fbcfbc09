// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Pipeline modules registered on the [`Application`](crate::engine::Application).
//!
//! The standard pipeline registers them in this order:
//!
//! ```text
//! DataBufferModule → JsonInputModule → Edm2ArrayModule → HitSummaryModule
//! ```

use crate::algorithms::{Edm2ArrayAlg, HitSummaryAlg};
use crate::config::AppConfig;
use crate::engine::Task;
use crate::errors::ConfigError;
use crate::input::JsonInputSource;
use crate::observability::messages::task::BackendsResolved;
use crate::observability::messages::StructuredLog;
use crate::store::NavBuffer;
use crate::traits::Module;

/// Attaches the event buffer service.
pub struct DataBufferModule;

impl Module for DataBufferModule {
    fn name(&self) -> &'static str {
        "data_buffer"
    }

    fn init(&self, task: &mut Task, _cfg: &AppConfig) -> Result<(), ConfigError> {
        task.set_nav_buffer(NavBuffer::new());
        Ok(())
    }
}

/// Attaches the JSON Lines file named by the configuration as event source.
pub struct JsonInputModule;

impl Module for JsonInputModule {
    fn name(&self) -> &'static str {
        "json_input"
    }

    fn init(&self, task: &mut Task, cfg: &AppConfig) -> Result<(), ConfigError> {
        task.set_source(Box::new(JsonInputSource::new(cfg.input_path())));
        Ok(())
    }
}

/// Attaches the event-to-array converter.
pub struct Edm2ArrayModule;

impl Module for Edm2ArrayModule {
    fn name(&self) -> &'static str {
        "edm2array"
    }

    fn init(&self, task: &mut Task, _cfg: &AppConfig) -> Result<(), ConfigError> {
        if task.nav_buffer().is_none() {
            return Err(ConfigError::ModuleInit {
                module: self.name().to_string(),
                reason: "requires the data_buffer module to be registered first".to_string(),
            });
        }
        task.add_algorithm(Box::new(Edm2ArrayAlg::new("Edm2ArrayAlg")));
        Ok(())
    }
}

/// Resolves the numeric backends and attaches the hit summary algorithm.
pub struct HitSummaryModule;

impl Module for HitSummaryModule {
    fn name(&self) -> &'static str {
        "hit_summary"
    }

    fn init(&self, task: &mut Task, cfg: &AppConfig) -> Result<(), ConfigError> {
        let backends = cfg.resolve_backends()?;
        BackendsResolved {
            backends: &backends.names(),
        }
        .log();
        task.add_algorithm(Box::new(HitSummaryAlg::new("HitSummaryAlg", backends)));
        Ok(())
    }
}
