mod config;


pub use config::{PipelineConfig, DEFAULT_COMMAND, DEFAULT_GREETING, DEFAULT_INPUT};

use crate::arena::Arena;
use crate::invoker::{self, ExitPolicy};
use crate::loader::Loader;
use crate::printer::Printer;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use tracing::{debug, warn};

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub input_bytes: usize,
    pub input_sha256: String,
    pub exit_code: Option<i32>,
    pub stdout_bytes: usize,
    pub stderr_bytes: usize,
}

/// Load the input, render it, and print greeting plus rendering to `sink`
///
/// Nothing reaches `sink` unless loading and rendering both succeed.
pub fn run<W: Write>(config: &PipelineConfig, sink: W) -> Result<RunReport> {
    let arena = Arena::new();
    let loader = match config.max_input_size {
        Some(max) => Loader::new().max_size(max),
        None => Loader::new(),
    };
    let content = loader
        .load(&arena, &config.input)
        .context("Failed to load input")?;

    let result = invoker::execute(&config.command, [content.to_os_str()])
        .context("Failed to run renderer")?;

    if !result.is_clean() && config.exit_policy == ExitPolicy::Ignore {
        warn!(
            command = result.command(),
            code = ?result.code(),
            stderr = %result.stderr_lossy().trim_end(),
            "renderer reported a problem, printing captured output anyway"
        );
    }
    let result = result
        .check(config.exit_policy)
        .context("Renderer failed")?;

    let report = RunReport {
        input_bytes: content.len(),
        input_sha256: content.digest(),
        exit_code: result.code(),
        stdout_bytes: result.stdout().len(),
        stderr_bytes: result.stderr().len(),
    };

    let mut printer = Printer::new(sink);
    printer
        .print(config.greeting.as_bytes())
        .context("Failed to write greeting")?;
    printer
        .print(result.stdout())
        .context("Failed to write rendering")?;

    debug!(
        arena_bytes = arena.allocated_bytes(),
        allocations = arena.allocation_count(),
        "run complete"
    );
    Ok(report)
}
