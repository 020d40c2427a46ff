//! Tests for standard IO providers.

use crate::{FileInput, InputProvider, StdinInput};
use std::fs;
use std::io::Read;

#[test]
fn file_input_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.txt");
    fs::write(&path, b"hello world").unwrap();

    let inp = FileInput::new(path.clone());
    let mut reader = inp.open().unwrap();
    let mut buf = String::new();
    reader.read_to_string(&mut buf).unwrap();

    assert_eq!(buf, "hello world");
    assert_eq!(inp.path(), &path);
    assert_eq!(inp.id(), path.to_string_lossy());
}

#[test]
fn file_input_missing_file_fails_to_open() {
    let dir = tempfile::tempdir().unwrap();
    let inp = FileInput::new(dir.path().join("absent.txt"));

    let err = inp.open().err().expect("missing file must not open");
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}

#[test]
fn stdin_input_uses_dash_id() {
    assert_eq!(StdinInput::new().id(), "-");
}
