//! Resolving a path argument to a stream and draining it.

use std::io::Read;
use std::sync::Arc;

use crate::config::{ResolverConfig, SourceSpec};
use crate::error::{ReadError, Result};
use crate::io::{FileInput, InputProvider, ProcessStdin};

/// Turns path arguments into open streams.
///
/// The default resolver treats `-` as stdin and reads stdin through the
/// process-wide reference in [`crate::io`]. Use [`SourceResolver::with_stdin`]
/// to inject a provider instead.
#[derive(Debug, Clone)]
pub struct SourceResolver {
    sentinel: String,
    stdin: Arc<dyn InputProvider>,
}

impl Default for SourceResolver {
    fn default() -> Self {
        Self::from_config(&ResolverConfig::default())
    }
}

impl SourceResolver {
    /// Create a resolver with the `-` sentinel and the process stdin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a resolver from a [`ResolverConfig`].
    pub fn from_config(config: &ResolverConfig) -> Self {
        Self {
            sentinel: config.stdin_sentinel.clone(),
            stdin: Arc::new(ProcessStdin),
        }
    }

    /// Read the sentinel from `provider` instead of the process stdin.
    pub fn with_stdin(mut self, provider: Arc<dyn InputProvider>) -> Self {
        self.stdin = provider;
        self
    }

    /// Set the sentinel path.
    ///
    /// Overrides the default `-`. An empty sentinel disables stdin entirely.
    pub fn with_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.sentinel = sentinel.into();
        self
    }

    pub fn sentinel(&self) -> &str {
        &self.sentinel
    }

    /// Classify `path` without opening anything.
    pub fn spec(&self, path: &str) -> SourceSpec {
        SourceSpec::parse(path, &self.sentinel)
    }

    /// Open the source named by `path`.
    ///
    /// No bytes are read. A path that is not exactly the sentinel is opened as
    /// a file, so an empty path fails with [`ReadError::OpenFailed`].
    pub fn resolve(&self, path: &str) -> Result<Box<dyn Read + Send>> {
        let opened = match self.spec(path) {
            SourceSpec::Stdin => {
                tracing::debug!(provider = self.stdin.id(), "resolving stdin");
                self.stdin.open()
            }
            SourceSpec::File(file) => {
                tracing::debug!(path = %file.display(), "opening file");
                FileInput::new(file).open()
            }
        };
        opened.map_err(|e| ReadError::open(path, e))
    }

    /// Read the whole source named by `path`.
    pub fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let stream = self.resolve(path)?;
        read_all(stream, path)
    }
}

/// Drain `reader` into memory.
///
/// The reader is consumed and dropped before this returns, which closes file
/// handles on success and failure alike. No size limit is applied.
pub fn read_all<R: Read>(mut reader: R, target: &str) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .map_err(|e| ReadError::read(target, e))?;
    tracing::trace!(source = target, bytes = buf.len(), "read complete");
    Ok(buf)
}
