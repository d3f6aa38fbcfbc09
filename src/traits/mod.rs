pub mod algorithm;
pub mod module;
pub mod source;

pub use algorithm::Algorithm;
pub use module::Module;
pub use source::EventSource;
