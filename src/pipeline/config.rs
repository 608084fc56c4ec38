use crate::invoker::ExitPolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "hello.txt";
pub const DEFAULT_COMMAND: &str = "cowsay";
pub const DEFAULT_GREETING: &str = "Hello, World!";

/// Everything one run needs. `Default` is the fixed, flag-free behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Text file to render, relative to the working directory
    pub input: PathBuf,
    /// Renderer looked up on the search path
    pub command: String,
    /// Line printed before the rendering
    pub greeting: String,
    /// Largest input accepted, `None` for no cap
    pub max_input_size: Option<u64>,
    pub exit_policy: ExitPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            command: DEFAULT_COMMAND.to_string(),
            greeting: DEFAULT_GREETING.to_string(),
            max_input_size: None,
            exit_policy: ExitPolicy::default(),
        }
    }
}
