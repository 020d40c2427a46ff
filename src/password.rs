//! Reading single-line secrets.
//!
//! A password file conventionally holds one line terminated by a newline.
//! Only the trailing whitespace run is removed; leading and internal
//! whitespace, including embedded newlines, are returned unchanged. No length
//! or content policy is applied.

use std::io::{BufRead, BufReader, Read};

use crate::error::{ReadError, Result};
use crate::resolver::SourceResolver;

impl SourceResolver {
    /// Read `path` and strip its trailing whitespace.
    pub fn read_password(&self, path: &str) -> Result<Vec<u8>> {
        let mut bytes = self.read_file(path)?;
        let keep = trim_trailing_whitespace(&bytes).len();
        bytes.truncate(keep);
        Ok(bytes)
    }

    /// Like [`read_password`](Self::read_password), decoded as UTF-8.
    pub fn read_string_password(&self, path: &str) -> Result<String> {
        let bytes = self.read_password(path)?;
        String::from_utf8(bytes).map_err(|e| ReadError::decode(path, e))
    }
}

/// Returns `bytes` without its trailing run of whitespace.
///
/// ASCII whitespace is matched bytewise. Non-ASCII whitespace such as
/// U+00A0 is recognised when it is valid UTF-8; other bytes stop the trim, so
/// binary secrets are never mangled.
pub fn trim_trailing_whitespace(bytes: &[u8]) -> &[u8] {
    let mut end = bytes.len();
    while end > 0 {
        let last = bytes[end - 1];
        if last.is_ascii() {
            if (last as char).is_whitespace() {
                end -= 1;
                continue;
            }
            break;
        }
        match last_char(&bytes[..end]) {
            Some((c, len)) if c.is_whitespace() => end -= len,
            _ => break,
        }
    }
    &bytes[..end]
}

// Decodes the final multi-byte UTF-8 character, if the tail is one.
fn last_char(bytes: &[u8]) -> Option<(char, usize)> {
    (2..=4.min(bytes.len())).find_map(|n| {
        let tail = std::str::from_utf8(&bytes[bytes.len() - n..]).ok()?;
        let mut chars = tail.chars();
        let c = chars.next()?;
        chars.next().is_none().then_some((c, n))
    })
}

/// Read the first line of `reader` with surrounding whitespace trimmed.
///
/// Reading stops after the first `\n` or at end of stream; an empty stream
/// yields an empty string.
pub fn read_line<R: Read>(reader: R, target: &str) -> Result<String> {
    let mut buf = Vec::new();
    BufReader::new(reader)
        .read_until(b'\n', &mut buf)
        .map_err(|e| ReadError::read(target, e))?;
    let line = String::from_utf8(buf).map_err(|e| ReadError::decode(target, e))?;
    Ok(line.trim().to_string())
}
