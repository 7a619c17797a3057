//! Environment variable configuration source.
//!
//! Responsibilities:
//! - Map process environment variables into the configuration key tree.
//! - Support an optional prefix filter (prefix is stripped from keys).
//! - Map `__` in variable names to key-path nesting.
//!
//! Invariants:
//! - Values are kept as strings; no type coercion happens here.
//! - With a prefix, variables not carrying it are ignored entirely.

use serde_json::Value;

use crate::source::{set_at_path, ConfigurationSource, Map};
use crate::ConfigError;

/// Separator inside variable names that maps to key-path nesting.
const NESTING_SEPARATOR: &str = "__";

/// A configuration source that reads process environment variables.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    prefix: Option<String>,
}

impl EnvSource {
    /// Creates a source over all environment variables, unprefixed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source that only reads variables starting with `prefix`,
    /// stripping the prefix from the resulting keys.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }
}

impl ConfigurationSource for EnvSource {
    fn name(&self) -> &str {
        "environment"
    }

    fn load(&self) -> Result<Map, ConfigError> {
        let mut map = Map::new();

        for (key, value) in std::env::vars() {
            let key = match &self.prefix {
                Some(prefix) => match key.strip_prefix(prefix.as_str()) {
                    Some(rest) if !rest.is_empty() => rest.to_string(),
                    _ => continue,
                },
                None => key,
            };

            let path = key.replace(NESTING_SEPARATOR, ":");
            set_at_path(&mut map, &path, Value::String(value));
        }

        Ok(map)
    }
}
