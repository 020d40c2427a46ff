//! The seam between a path argument and the bytes behind it.

use std::fmt::Debug;
use std::io::Read;

/// Something a path argument can resolve to.
///
/// The resolver calls [`open`](Self::open) once per read and drops the
/// stream when the read ends, so implementors tie any OS handle to the
/// returned box.
pub trait InputProvider: Send + Sync + Debug {
    /// Name used in errors and log events: `-` for stdin, the path for files.
    fn id(&self) -> &str;

    /// Open a stream over the whole source.
    fn open(&self) -> std::io::Result<Box<dyn Read + Send>>;
}
