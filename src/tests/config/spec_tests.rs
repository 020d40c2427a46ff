//! Tests for SourceSpec classification.

use std::path::PathBuf;

use crate::SourceSpec;

#[test]
fn dash_is_stdin() {
    assert_eq!(SourceSpec::from("-"), SourceSpec::Stdin);
    assert!(SourceSpec::from("-").is_stdin());
}

#[test]
fn only_exact_sentinel_is_stdin() {
    for raw in ["", " -", "- ", "--", "./-"] {
        assert_eq!(
            SourceSpec::from(raw),
            SourceSpec::File(PathBuf::from(raw)),
            "raw = {raw:?}"
        );
    }
}

#[test]
fn custom_sentinel() {
    assert_eq!(SourceSpec::parse("stdin", "stdin"), SourceSpec::Stdin);
    assert_eq!(
        SourceSpec::parse("-", "stdin"),
        SourceSpec::File(PathBuf::from("-"))
    );
}

#[test]
fn display() {
    assert_eq!(SourceSpec::Stdin.to_string(), "stdin");
    assert_eq!(SourceSpec::from("a/b.txt").to_string(), "a/b.txt");
}

#[test]
fn empty_sentinel_never_selects_stdin() {
    assert_eq!(SourceSpec::parse("", ""), SourceSpec::File(PathBuf::new()));
}
