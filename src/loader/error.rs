use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to open {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a regular file: {0}")]
    NotAFile(PathBuf),

    #[error("File too large: {path} is {size} bytes (max: {max})")]
    FileTooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("File changed while being read: {path} (expected {expected} bytes)")]
    Changed { path: PathBuf, expected: u64 },
}
