use crate::engine::TaskContext;
use crate::errors::AlgorithmError;

/// Lifecycle contract for an event-processing algorithm.
///
/// The run loop calls `initialize` once, `execute` once per event in order, and
/// `finalize` once at the end. Implementations must not assume anything about
/// when or how often they are called beyond that order.
pub trait Algorithm {
    fn name(&self) -> &str;

    /// Acquire the services the algorithm needs from the task.
    fn initialize(&mut self, ctx: &TaskContext) -> Result<(), AlgorithmError>;

    /// Process the current event.
    fn execute(&mut self) -> Result<(), AlgorithmError>;

    fn finalize(&mut self) -> Result<(), AlgorithmError>;
}
