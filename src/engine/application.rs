// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;

use crate::config::consts::DEFAULT_TASK_NAME;
use crate::config::AppConfig;
use crate::engine::task::{RunSummary, Task};
use crate::errors::ApplicationError;
use crate::observability::messages::task::ModuleInitialized;
use crate::observability::messages::StructuredLog;
use crate::traits::Module;

/// Application builder - composes modules into a task and runs it.
///
/// Modules are initialized in registration order when the application runs,
/// so a module may rely on whatever earlier modules attached to the task.
///
/// # Examples
///
/// ```no_run
/// use hit_summary::config::AppConfig;
/// use hit_summary::engine::Application;
/// use hit_summary::modules::{DataBufferModule, Edm2ArrayModule, HitSummaryModule, JsonInputModule};
///
/// # async fn demo() -> Result<(), hit_summary::errors::ApplicationError> {
/// let mut app = Application::new("Summarize detector hits", AppConfig::default());
/// app.set_default_input("sample_detsim.jsonl");
/// app.register(DataBufferModule)
///     .register(JsonInputModule)
///     .register(Edm2ArrayModule)
///     .register(HitSummaryModule);
///
/// let summary = app.run().await?;
/// println!("{} events processed", summary.processed);
/// # Ok(())
/// # }
/// ```
pub struct Application {
    description: String,
    config: AppConfig,
    modules: Vec<Box<dyn Module>>,
}

impl Application {
    pub fn new(description: impl Into<String>, config: AppConfig) -> Self {
        Self {
            description: description.into(),
            config,
            modules: Vec::new(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Input used when the configuration does not name one.
    pub fn set_default_input(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        if self.config.input.is_none() {
            self.config.input = Some(path.into());
        }
        self
    }

    pub fn register(&mut self, module: impl Module + 'static) -> &mut Self {
        self.modules.push(Box::new(module));
        self
    }

    pub fn module_names(&self) -> Vec<&'static str> {
        self.modules.iter().map(|m| m.name()).collect()
    }

    /// Create the top task and let every module attach itself to it.
    pub fn build_task(&self) -> Result<Task, ApplicationError> {
        let mut task = Task::new(DEFAULT_TASK_NAME);
        task.set_evt_max(self.config.evt_max);
        task.set_failure_strategy(self.config.failure_strategy);

        for module in &self.modules {
            module.init(&mut task, &self.config)?;
            ModuleInitialized {
                module: module.name(),
            }
            .log();
        }
        Ok(task)
    }

    /// Build the task and drive it to completion.
    pub async fn run(&self) -> Result<RunSummary, ApplicationError> {
        let mut task = self.build_task()?;
        Ok(task.run().await?)
    }
}
