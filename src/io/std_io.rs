//! The two real sources: the OS stdin and a file on disk.

use std::io::{self, Read};
use std::path::PathBuf;

use super::InputProvider;
use crate::STDIN_SENTINEL;

/// The OS stdin, descriptor 0.
///
/// Streams borrow the process-wide handle; dropping one leaves the descriptor
/// open for the rest of the process.
#[derive(Debug, Clone)]
pub struct StdinInput {
    id: String,
}

impl StdinInput {
    pub fn new() -> Self {
        Self {
            id: STDIN_SENTINEL.into(),
        }
    }
}

impl Default for StdinInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputProvider for StdinInput {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        Ok(Box::new(io::stdin()))
    }
}

/// A file opened fresh on every read, so concurrent reads of one path never
/// share a cursor.
#[derive(Debug, Clone)]
pub struct FileInput {
    id: String,
    path: PathBuf,
}

impl FileInput {
    /// `path` is used as given; no normalization.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let id = path.to_string_lossy().into_owned();
        Self { id, path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl InputProvider for FileInput {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        let file = std::fs::File::open(&self.path)?;
        Ok(Box::new(file))
    }
}
