//! Source specifications.

use std::fmt;
use std::path::PathBuf;

use crate::STDIN_SENTINEL;

/// What a raw path argument refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSpec {
    /// The sentinel: read from the process stdin
    Stdin,
    /// A filesystem path, taken literally
    File(PathBuf),
}

impl SourceSpec {
    /// Classify `raw` against `sentinel`.
    ///
    /// Only an exact match selects stdin. An empty sentinel never matches, so
    /// an empty path is always a (failing) file path. No normalization is
    /// performed and the filesystem is not consulted.
    pub fn parse(raw: &str, sentinel: &str) -> Self {
        if !sentinel.is_empty() && raw == sentinel {
            SourceSpec::Stdin
        } else {
            SourceSpec::File(PathBuf::from(raw))
        }
    }

    pub fn is_stdin(&self) -> bool {
        matches!(self, SourceSpec::Stdin)
    }
}

impl From<&str> for SourceSpec {
    fn from(raw: &str) -> Self {
        SourceSpec::parse(raw, STDIN_SENTINEL)
    }
}

impl fmt::Display for SourceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceSpec::Stdin => write!(f, "stdin"),
            SourceSpec::File(path) => write!(f, "{}", path.display()),
        }
    }
}
