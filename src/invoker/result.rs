use super::InvokeError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::process::ExitStatus;

/// What the caller does with a renderer that exits non-zero or writes to stderr
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExitPolicy {
    /// Log it and print whatever stdout was captured
    #[default]
    Ignore,
    /// Treat it as an error
    Fail,
}

/// Captured outcome of one child process
#[derive(Debug, Clone)]
pub struct ProcessResult {
    pub(crate) command: String,
    pub(crate) status: ExitStatus,
    pub(crate) stdout: Vec<u8>,
    pub(crate) stderr: Vec<u8>,
}

impl ProcessResult {
    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn status(&self) -> ExitStatus {
        self.status
    }

    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Exit code, or `None` if the child was killed by a signal
    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    pub fn stdout(&self) -> &[u8] {
        &self.stdout
    }

    pub fn stderr(&self) -> &[u8] {
        &self.stderr
    }

    pub fn stderr_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.stderr)
    }

    /// Consume the result, keeping only captured stdout
    pub fn into_stdout(self) -> Vec<u8> {
        self.stdout
    }

    /// Zero exit status and nothing written to stderr
    pub fn is_clean(&self) -> bool {
        self.success() && self.stderr.is_empty()
    }

    /// Apply `policy` to the exit status and stderr
    ///
    /// Under [`ExitPolicy::Fail`] a non-zero exit or any stderr output becomes
    /// [`InvokeError::Failed`]. Under [`ExitPolicy::Ignore`] the result is
    /// returned unchanged.
    pub fn check(self, policy: ExitPolicy) -> Result<Self, InvokeError> {
        match policy {
            ExitPolicy::Fail if !self.is_clean() => Err(InvokeError::Failed {
                command: self.command.clone(),
                code: self.code(),
                stderr: self.stderr_lossy().trim_end().to_string(),
            }),
            _ => Ok(self),
        }
    }
}
