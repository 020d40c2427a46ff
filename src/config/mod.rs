//! Configuration types for resolving sources.
//!
//! This module provides:
//! - `SourceSpec`: Classification of a raw path argument
//! - `ResolverConfig`: Deserializable settings for a `SourceResolver`

mod resolver;
mod spec;

pub use resolver::ResolverConfig;
pub use spec::SourceSpec;
