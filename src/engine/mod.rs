pub mod application;
pub mod task;

pub use application::Application;
pub use task::{RunSummary, Task, TaskContext};
