//! Tests for ResolverConfig parsing.

use crate::{ResolverConfig, SourceResolver};

#[test]
fn empty_config_uses_dash() {
    let cfg: ResolverConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg, ResolverConfig::default());
    assert_eq!(cfg.stdin_sentinel, "-");
}

#[test]
fn sentinel_is_configurable() {
    let cfg: ResolverConfig = serde_json::from_str(r#"{"stdin_sentinel": "STDIN"}"#).unwrap();
    assert_eq!(cfg, ResolverConfig::new().with_stdin_sentinel("STDIN"));

    let resolver = SourceResolver::from_config(&cfg);
    assert_eq!(resolver.sentinel(), "STDIN");
    assert!(resolver.spec("STDIN").is_stdin());
    assert!(!resolver.spec("-").is_stdin());
}

#[test]
fn empty_sentinel_in_config_keeps_empty_path_a_file() {
    let cfg: ResolverConfig = serde_json::from_str(r#"{"stdin_sentinel": ""}"#).unwrap();
    let resolver = SourceResolver::from_config(&cfg);

    assert!(!resolver.spec("").is_stdin());
    let err = resolver.read_file("").unwrap_err();
    assert_eq!(err.stage(), crate::Stage::Open);
}
