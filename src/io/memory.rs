//! Fixed bytes standing in for stdin.

use std::io::{self, Cursor, Read};
use std::sync::Arc;

use super::InputProvider;

/// A byte buffer replayed from the start on every open.
///
/// Install it with [`replace_stdin`](super::replace_stdin) or
/// [`SourceResolver::with_stdin`](crate::SourceResolver::with_stdin) to feed
/// piped input without touching the real descriptor.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    id: String,
    data: Arc<Vec<u8>>,
}

impl InMemorySource {
    pub fn new(id: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            data: Arc::new(data),
        }
    }

    /// Same as [`new`](Self::new) for text fixtures.
    pub fn from_string(id: impl Into<String>, data: impl Into<String>) -> Self {
        Self::new(id, data.into().into_bytes())
    }

    /// Number of bytes every opened stream yields.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl InputProvider for InMemorySource {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        Ok(Box::new(Cursor::new(self.data.to_vec())))
    }
}
