use crate::config::AppConfig;
use crate::engine::Task;
use crate::errors::ConfigError;

/// A unit of application wiring.
///
/// Modules are registered on an [`Application`](crate::engine::Application) in
/// a fixed order and each one attaches services, an event source or algorithms
/// to the task when the application starts. Modules never see events.
pub trait Module {
    fn name(&self) -> &'static str;

    fn init(&self, task: &mut Task, cfg: &AppConfig) -> Result<(), ConfigError>;
}
