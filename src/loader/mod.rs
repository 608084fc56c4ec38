mod content;
mod error;

#[cfg(test)]
mod tests;

pub use content::FileContent;
pub use error::LoadError;

use crate::arena::Arena;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use tracing::debug;

/// Whole-file reader that places content into an [`Arena`]
#[derive(Debug, Clone, Default)]
pub struct Loader {
    max_size: Option<u64>,
}

impl Loader {
    /// Create a loader with no size cap
    pub fn new() -> Self {
        Self { max_size: None }
    }

    /// Set maximum file size
    pub fn max_size(mut self, size: u64) -> Self {
        self.max_size = Some(size);
        self
    }

    /// Read the whole file at `path` into a buffer sized exactly to it
    ///
    /// Either the complete content is returned or an error; a file that
    /// shrinks or grows during the read is reported as [`LoadError::Changed`].
    ///
    /// The buffer is sized from the file's metadata. Pseudo-files such as
    /// those under `/proc` or `/sys` report a length that does not match
    /// what a read returns, so they fail with [`LoadError::Changed`].
    pub fn load<'a>(
        &self,
        arena: &'a Arena,
        path: &'a Path,
    ) -> Result<FileContent<'a>, LoadError> {
        let mut file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let metadata = file.metadata().map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        if !metadata.is_file() {
            return Err(LoadError::NotAFile(path.to_path_buf()));
        }

        // Check size limit before committing arena memory
        let size = metadata.len();
        if let Some(max) = self.max_size.filter(|&max| size > max) {
            return Err(LoadError::FileTooLarge {
                path: path.to_path_buf(),
                size,
                max,
            });
        }
        let length = usize::try_from(size).map_err(|_| LoadError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            max: usize::MAX as u64,
        })?;

        let buffer = arena.allocate(length);
        file.read_exact(buffer).map_err(|source| match source.kind() {
            ErrorKind::UnexpectedEof => LoadError::Changed {
                path: path.to_path_buf(),
                expected: size,
            },
            _ => LoadError::Read {
                path: path.to_path_buf(),
                source,
            },
        })?;

        // Anything past the recorded length means the file grew mid-read
        let mut probe = [0u8; 1];
        match file.read(&mut probe) {
            Ok(0) => {}
            Ok(_) => {
                return Err(LoadError::Changed {
                    path: path.to_path_buf(),
                    expected: size,
                })
            }
            Err(source) => {
                return Err(LoadError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }

        let content = FileContent {
            path,
            bytes: buffer,
        };
        debug!(
            path = %path.display(),
            bytes = content.len(),
            sha256 = %content.digest(),
            "loaded input file"
        );

        Ok(content)
    }
}
