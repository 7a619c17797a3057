//! In-memory configuration source for programmatic defaults.

use serde_json::Value;

use crate::source::{set_at_path, ConfigurationSource, Map};
use crate::ConfigError;

/// A configuration source over an in-memory key-value list.
///
/// Useful for supplying programmatic defaults below the file layers, and
/// for tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    entries: Vec<(String, Value)>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry at a colon-separated key path.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }
}

impl ConfigurationSource for MemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    fn load(&self) -> Result<Map, ConfigError> {
        let mut map = Map::new();
        for (key, value) in &self.entries {
            set_at_path(&mut map, key, value.clone());
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entries_land_at_paths() {
        let map = MemorySource::new()
            .with("A", "1")
            .with("Nested:B", 2)
            .load()
            .unwrap();

        assert_eq!(Value::Object(map), json!({"A": "1", "Nested": {"B": 2}}));
    }
}
