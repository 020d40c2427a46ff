//! Error types for reading sources.
//!
//! This module provides:
//! - `Stage`: Indicates where a read failed
//! - `ReadError`: A single failure with the path or `-` it concerns

use std::fmt;
use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ReadError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Error while opening the source
    Open,
    Read,
    /// Bytes were not valid UTF-8
    Decode,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Open => write!(f, "Open"),
            Stage::Read => write!(f, "Read"),
            Stage::Decode => write!(f, "Decode"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ReadError {
    /// The source could not be opened (missing, permission denied, directory).
    #[error("failed to open '{path}': {source}")]
    OpenFailed {
        path: String,
        #[source]
        source: io::Error,
    },

    /// An opened stream failed while being drained.
    #[error("failed to read '{target}': {source}")]
    ReadFailed {
        target: String,
        #[source]
        source: io::Error,
    },

    #[error("content of '{target}' is not valid UTF-8: {source}")]
    DecodeFailed {
        target: String,
        #[source]
        source: FromUtf8Error,
    },
}

impl ReadError {
    pub(crate) fn open(path: impl Into<String>, source: io::Error) -> Self {
        Self::OpenFailed {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn read(target: impl Into<String>, source: io::Error) -> Self {
        Self::ReadFailed {
            target: target.into(),
            source,
        }
    }

    pub(crate) fn decode(target: impl Into<String>, source: FromUtf8Error) -> Self {
        Self::DecodeFailed {
            target: target.into(),
            source,
        }
    }

    /// The stage at which this error occurred.
    pub fn stage(&self) -> Stage {
        match self {
            ReadError::OpenFailed { .. } => Stage::Open,
            ReadError::ReadFailed { .. } => Stage::Read,
            ReadError::DecodeFailed { .. } => Stage::Decode,
        }
    }

    /// Identifier of the source ("-" for stdin, the path otherwise).
    pub fn target(&self) -> &str {
        match self {
            ReadError::OpenFailed { path, .. } => path,
            ReadError::ReadFailed { target, .. } | ReadError::DecodeFailed { target, .. } => {
                target
            }
        }
    }

    /// The underlying I/O error kind, if this error came from the OS.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            ReadError::OpenFailed { source, .. } | ReadError::ReadFailed { source, .. } => {
                Some(source.kind())
            }
            ReadError::DecodeFailed { .. } => None,
        }
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
