use anyhow::Result;
use asciibox::pipeline::{DEFAULT_COMMAND, DEFAULT_GREETING, DEFAULT_INPUT};
use asciibox::{run, ExitPolicy, PipelineConfig};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;

/// Render a text file through an external line-art tool.
///
/// With no flags, reads ./hello.txt, hands its text to `cowsay`, and prints
/// a greeting followed by the rendering.
#[derive(Parser)]
#[command(name = "asciibox")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Text file to render
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Renderer executable, looked up on PATH
    #[arg(short, long, default_value = DEFAULT_COMMAND)]
    command: String,

    /// Line printed before the rendering
    #[arg(short, long, default_value = DEFAULT_GREETING)]
    greeting: String,

    /// Largest input accepted, in bytes (no cap by default)
    #[arg(long)]
    max_size: Option<u64>,

    /// What to do when the renderer exits non-zero or writes to stderr
    #[arg(long, value_enum, default_value_t = ExitPolicy::Ignore)]
    on_failure: ExitPolicy,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_config(self) -> PipelineConfig {
        PipelineConfig {
            input: self.input,
            command: self.command,
            greeting: self.greeting,
            max_input_size: self.max_size,
            exit_policy: self.on_failure,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.into_config();
    debug!(config = %serde_json::to_string(&config)?, "effective configuration");

    let report = run(&config, io::stdout().lock())?;
    debug!(report = %serde_json::to_string(&report)?, "run report");

    Ok(())
}
