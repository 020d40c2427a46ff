//! # pathread
//!
//! Read "a path, or `-` for stdin" into memory.
//!
//! ## Overview
//!
//! pathread provides:
//! - **Whole-source reads**: `read_file` returns every byte of a file, or of
//!   stdin when the path is exactly `-`
//! - **Password files**: `read_password_from_file` and
//!   `read_string_password_from_file` strip the trailing newline and any other
//!   trailing whitespace
//! - **Existence probe**: `file_exists` never fails, it only answers yes or no
//! - **Injectable stdin**: `SourceResolver::with_stdin` for explicit context,
//!   or `io::replace_stdin` to swap the process-wide stdin in tests
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! fn main() -> Result<(), pathread::ReadError> {
//!     // `-` reads stdin, anything else is a file path
//!     let data = pathread::read_file("-")?;
//!     let password = pathread::read_string_password_from_file("secret.txt")?;
//!     println!("{} bytes, password of {} chars", data.len(), password.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `miette` - Pretty error reporting with miette
//!
//! ## Semantics
//!
//! - Every read is synchronous and blocking and returns the full content.
//! - File handles are closed before a read returns, on every path.
//! - The stdin handle is never closed.
//! - Errors are returned untouched; nothing is retried and nothing is printed.

pub mod config;
pub mod error;
pub mod exists;
pub mod io;
pub mod password;
pub mod resolver;

pub use config::{ResolverConfig, SourceSpec};
pub use error::{ReadError, Result, Stage};
pub use exists::file_exists;
pub use io::{FileInput, InMemorySource, InputProvider, ProcessStdin, StdinInput};
pub use password::{read_line, trim_trailing_whitespace};
pub use resolver::{SourceResolver, read_all};

#[cfg(feature = "miette")]
pub use error::ReadDiagnostic;

/// Path value that selects stdin instead of a file.
pub const STDIN_SENTINEL: &str = "-";

/// Read the full contents of `path`, or of stdin when `path` is `-`.
pub fn read_file(path: &str) -> Result<Vec<u8>> {
    SourceResolver::default().read_file(path)
}

/// Read a password from `path` (or stdin), without trailing whitespace.
pub fn read_password_from_file(path: &str) -> Result<Vec<u8>> {
    SourceResolver::default().read_password(path)
}

/// Read a password from `path` (or stdin) as UTF-8 text.
pub fn read_string_password_from_file(path: &str) -> Result<String> {
    SourceResolver::default().read_string_password(path)
}
