//! Resolver configuration.

use serde::Deserialize;

use crate::STDIN_SENTINEL;

/// Settings for building a [`SourceResolver`](crate::SourceResolver).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResolverConfig {
    /// Path value that selects stdin instead of a file; empty disables stdin
    #[serde(default = "default_sentinel")]
    pub stdin_sentinel: String,
}

fn default_sentinel() -> String {
    STDIN_SENTINEL.to_string()
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            stdin_sentinel: default_sentinel(),
        }
    }
}

impl ResolverConfig {
    /// Create a configuration with the default `-` sentinel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stdin sentinel.
    pub fn with_stdin_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.stdin_sentinel = sentinel.into();
        self
    }
}
