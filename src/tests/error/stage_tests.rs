//! Tests for error stages and accessors.

use std::io;

use crate::error::ReadError;
use crate::{SourceResolver, Stage};

#[test]
fn stage_display() {
    assert_eq!(Stage::Open.to_string(), "Open");
    assert_eq!(Stage::Read.to_string(), "Read");
    assert_eq!(Stage::Decode.to_string(), "Decode");
}

#[test]
fn open_failure_carries_path_and_cause() {
    let err = SourceResolver::new()
        .read_file("/definitely/not/here.txt")
        .unwrap_err();

    assert_eq!(err.stage(), Stage::Open);
    assert_eq!(err.target(), "/definitely/not/here.txt");
    assert_eq!(err.io_kind(), Some(io::ErrorKind::NotFound));
    assert!(err.to_string().contains("/definitely/not/here.txt"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn decode_failure_has_no_io_kind() {
    let utf8 = String::from_utf8(vec![0xff]).unwrap_err();
    let err = ReadError::decode("-", utf8);

    assert_eq!(err.stage(), Stage::Decode);
    assert_eq!(err.target(), "-");
    assert_eq!(err.io_kind(), None);
}
