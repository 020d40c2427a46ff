//! I/O abstractions for input providers.
//!
//! This module provides:
//! - `InputProvider`: Trait for input sources
//! - Standard implementations for files and stdin
//! - The process-wide, test-swappable stdin reference
//! - An in-memory implementation for testing

mod input;
mod memory;
mod std_io;
mod stdin;

pub use input::InputProvider;
pub use memory::InMemorySource;
pub use std_io::{FileInput, StdinInput};
pub use stdin::{ProcessStdin, StdinGuard, current_stdin, replace_stdin};
