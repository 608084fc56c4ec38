// Public API exports
pub mod arena;
pub mod invoker;
pub mod loader;
pub mod pipeline;
pub mod printer;

// Re-export main types for convenience
pub use arena::Arena;
pub use loader::{FileContent, LoadError, Loader};

pub use invoker::{execute, ExitPolicy, InvokeError, ProcessResult};

pub use printer::Printer;

pub use pipeline::{run, PipelineConfig, RunReport};
