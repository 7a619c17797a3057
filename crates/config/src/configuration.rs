//! Merged configuration snapshot and key lookup.
//!
//! Responsibilities:
//! - Hold the merged key tree produced by the builder.
//! - Look up values by colon-separated key paths.
//! - Expose named sections and typed binding via serde.
//! - Re-run the source pipeline on explicit reload.
//!
//! Does NOT handle:
//! - Watching files for changes; `reload()` must be called by whoever
//!   observes a change.
//!
//! Invariants:
//! - Lookups are case-sensitive.
//! - A missing section is an empty section, not an error.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::source::{deep_merge, ConfigurationSource, Map};
use crate::ConfigError;

/// An immutable view over merged configuration, reloadable on demand.
#[derive(Debug)]
pub struct Configuration {
    sources: Vec<Box<dyn ConfigurationSource>>,
    root: Value,
}

impl Configuration {
    pub(crate) fn new(sources: Vec<Box<dyn ConfigurationSource>>, root: Map) -> Self {
        Self {
            sources,
            root: Value::Object(root),
        }
    }

    /// Looks up a value by colon-separated key path.
    ///
    /// Array elements are addressed by decimal index segments.
    pub fn get(&self, path: &str) -> Option<&Value> {
        lookup(&self.root, path)
    }

    /// Looks up a value and renders scalars as strings.
    ///
    /// Objects and arrays return `None`.
    pub fn get_string(&self, path: &str) -> Option<String> {
        value_to_string(self.get(path)?)
    }

    /// Returns the named section, empty when absent.
    pub fn section(&self, path: &str) -> ConfigSection {
        ConfigSection {
            key: path.to_string(),
            value: self.get(path).cloned().unwrap_or(Value::Null),
        }
    }

    /// Deserializes the subtree at `path` into `T`.
    ///
    /// An empty `path` binds the whole tree.
    pub fn bind<T: DeserializeOwned>(&self, path: &str) -> Result<T, ConfigError> {
        let value = self.get(path).cloned().unwrap_or(Value::Null);
        serde_json::from_value(value).map_err(|e| ConfigError::Deserialize {
            key: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Whether any registered source supports observing changes.
    pub fn supports_reload(&self) -> bool {
        self.sources.iter().any(|s| s.reloadable())
    }

    /// Re-runs the entire source pipeline and replaces the merged tree.
    ///
    /// Precedence is identical to the original build.
    pub fn reload(&mut self) -> Result<(), ConfigError> {
        let mut root = Map::new();
        for source in &self.sources {
            deep_merge(&mut root, source.load()?);
        }
        self.root = Value::Object(root);
        Ok(())
    }
}

/// A view over one named subtree of the configuration.
#[derive(Debug, Clone)]
pub struct ConfigSection {
    key: String,
    value: Value,
}

impl ConfigSection {
    /// The full key path this section was resolved from.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether the section was present in the configuration.
    pub fn exists(&self) -> bool {
        !self.value.is_null()
    }

    /// Looks up a value relative to this section.
    pub fn get(&self, path: &str) -> Option<&Value> {
        lookup(&self.value, path)
    }

    /// Looks up a relative value and renders scalars as strings.
    pub fn get_string(&self, path: &str) -> Option<String> {
        value_to_string(self.get(path)?)
    }

    /// Child key names, in document order. Empty for non-object sections.
    pub fn keys(&self) -> Vec<&str> {
        match &self.value {
            Value::Object(map) => map.keys().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Returns a nested section relative to this one.
    pub fn section(&self, path: &str) -> ConfigSection {
        ConfigSection {
            key: format!("{}:{}", self.key, path),
            value: self.get(path).cloned().unwrap_or(Value::Null),
        }
    }
}

fn lookup<'a>(mut current: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(current);
    }

    for segment in path.split(':') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }

    Some(current)
}

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::MemorySource;
    use crate::ConfigurationBuilder;
    use serde::Deserialize;
    use serde_json::json;

    fn sample() -> Configuration {
        ConfigurationBuilder::new()
            .add_in_memory(
                MemorySource::new()
                    .with("Name", "demo")
                    .with("Server:Port", 8080)
                    .with("Server:Hosts", json!(["a", "b"]))
                    .with("Logging:LogLevel:Default", "Information"),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_get_walks_paths_and_arrays() {
        let config = sample();

        assert_eq!(config.get("Server:Port"), Some(&json!(8080)));
        assert_eq!(config.get("Server:Hosts:1"), Some(&json!("b")));
        assert_eq!(config.get("Server:Missing"), None);
    }

    #[test]
    fn test_get_string_renders_scalars() {
        let config = sample();

        assert_eq!(config.get_string("Name").as_deref(), Some("demo"));
        assert_eq!(config.get_string("Server:Port").as_deref(), Some("8080"));
        assert_eq!(config.get_string("Server"), None);
    }

    #[test]
    fn test_missing_section_is_empty_not_error() {
        let config = sample();
        let section = config.section("NoSuchSection");

        assert!(!section.exists());
        assert!(section.keys().is_empty());
        assert_eq!(section.get_string("anything"), None);
    }

    #[test]
    fn test_section_relative_lookup_and_nesting() {
        let config = sample();
        let logging = config.section("Logging");

        assert!(logging.exists());
        assert_eq!(
            logging.get_string("LogLevel:Default").as_deref(),
            Some("Information")
        );

        let levels = logging.section("LogLevel");
        assert_eq!(levels.key(), "Logging:LogLevel");
        assert_eq!(levels.keys(), vec!["Default"]);
    }

    #[test]
    fn test_bind_deserializes_subtree() {
        #[derive(Deserialize)]
        struct Server {
            #[serde(rename = "Port")]
            port: u16,
        }

        let config = sample();
        let server: Server = config.bind("Server").unwrap();
        assert_eq!(server.port, 8080);

        let result: Result<Server, _> = config.bind("Name");
        assert!(matches!(result, Err(ConfigError::Deserialize { .. })));
    }

    #[test]
    fn test_reload_reruns_file_sources() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("appsettings.json");
        std::fs::write(&path, r#"{"K": "1"}"#).unwrap();

        let mut config = ConfigurationBuilder::new()
            .add_json_file(&path, false, true)
            .build()
            .unwrap();
        assert!(config.supports_reload());
        assert_eq!(config.get_string("K").as_deref(), Some("1"));

        std::fs::write(&path, r#"{"K": "2"}"#).unwrap();
        config.reload().unwrap();
        assert_eq!(config.get_string("K").as_deref(), Some("2"));
    }
}
