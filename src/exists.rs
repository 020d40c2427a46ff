//! Best-effort existence probe.

use std::fs;

/// Reports whether a filesystem entry exists at `path`.
///
/// Any lookup failure, including a missing entry, an empty path, or a
/// permission error, yields `false`. The stdin sentinel has no special
/// meaning here. The answer may be stale by the time the caller acts on it.
pub fn file_exists(path: &str) -> bool {
    fs::metadata(path).is_ok()
}
