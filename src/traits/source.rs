use async_trait::async_trait;

use crate::errors::ExecutionError;
use crate::store::edm::EventNavigator;

#[async_trait]
pub trait EventSource: Send {
    /// Next event, or `None` once the input is exhausted.
    async fn next_event(&mut self) -> Result<Option<EventNavigator>, ExecutionError>;

    fn name(&self) -> &str;
}
