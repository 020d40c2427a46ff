//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{ReadError, Stage};

/// A diagnostic wrapper for read errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct ReadDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<ReadError>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

fn help_for(stage: Stage) -> &'static str {
    match stage {
        Stage::Open => "Check that the path exists and is a readable file, or pass '-' for stdin",
        Stage::Read => "The source was opened but could not be read to the end",
        Stage::Decode => "The file must contain UTF-8 text",
    }
}

impl From<ReadError> for ReadDiagnostic {
    fn from(e: ReadError) -> Self {
        ReadDiagnostic {
            message: format!("[{}] on '{}'", e.stage(), e.target()),
            help: Some(help_for(e.stage()).into()),
            source: Some(e),
            severity: Severity::Error,
        }
    }
}

impl From<ReadError> for miette::Report {
    fn from(e: ReadError) -> Self {
        miette::Report::new(ReadDiagnostic::from(e))
    }
}
