mod error;
mod result;


pub use error::InvokeError;
pub use result::{ExitPolicy, ProcessResult};

use std::ffi::OsStr;
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// Run `command` with `args` and wait for it to exit
///
/// Each argument reaches the child as-is; there is no shell in between.
/// Both output streams are captured in full. The exit status is recorded
/// but not judged here, see [`ProcessResult::check`].
pub fn execute<I, S>(command: &str, args: I) -> Result<ProcessResult, InvokeError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    debug!(command, "spawning renderer");

    let output = Command::new(command)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|source| InvokeError::Spawn {
            command: command.to_string(),
            source,
        })?;

    info!(
        command,
        code = ?output.status.code(),
        stdout_bytes = output.stdout.len(),
        stderr_bytes = output.stderr.len(),
        "renderer exited"
    );

    Ok(ProcessResult {
        command: command.to_string(),
        status: output.status,
        stdout: output.stdout,
        stderr: output.stderr,
    })
}
