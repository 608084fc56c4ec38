use sha2::{Digest, Sha256};
use std::ffi::OsStr;
use std::path::Path;

/// Bytes of a file as they were at read time, borrowed from the arena
#[derive(Debug, Clone, Copy)]
pub struct FileContent<'a> {
    /// Path the bytes were read from
    pub(crate) path: &'a Path,
    /// Arena-backed file bytes
    pub(crate) bytes: &'a [u8],
}

impl<'a> FileContent<'a> {
    pub fn path(&self) -> &'a Path {
        self.path
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Lowercase hex SHA-256 of the content
    pub fn digest(&self) -> String {
        hex::encode(Sha256::digest(self.bytes))
    }

    /// The content as a single process argument, bytes untouched
    #[cfg(unix)]
    pub fn to_os_str(&self) -> std::borrow::Cow<'a, OsStr> {
        use std::os::unix::ffi::OsStrExt;
        std::borrow::Cow::Borrowed(OsStr::from_bytes(self.bytes))
    }

    /// The content as a single process argument
    ///
    /// Non-Unix platforms cannot carry arbitrary bytes in an argument, so
    /// invalid UTF-8 is replaced.
    #[cfg(not(unix))]
    pub fn to_os_str(&self) -> std::borrow::Cow<'a, OsStr> {
        match String::from_utf8_lossy(self.bytes) {
            std::borrow::Cow::Borrowed(s) => std::borrow::Cow::Borrowed(OsStr::new(s)),
            std::borrow::Cow::Owned(s) => std::borrow::Cow::Owned(s.into()),
        }
    }
}
