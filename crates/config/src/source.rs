//! Configuration source trait and key-tree merging.
//!
//! Responsibilities:
//! - Define the `ConfigurationSource` trait implemented by every layer.
//! - Deep-merge loaded key trees in registration order.
//! - Insert values at colon-separated key paths.
//!
//! Invariants:
//! - Maps merge recursively; any other value (including arrays) replaces
//!   the earlier value wholesale.
//! - Later sources override earlier ones key-by-key.

use serde_json::Value;

use crate::ConfigError;

/// The merged key tree type shared across sources.
pub(crate) type Map = serde_json::Map<String, Value>;

/// A single layer in the configuration pipeline.
///
/// Sources load their entire key tree at once; the builder merges trees in
/// registration order so that later sources win for duplicate keys.
pub trait ConfigurationSource: Send + Sync + std::fmt::Debug {
    /// Human-readable source name used in log messages.
    fn name(&self) -> &str;

    /// Loads the full key tree for this source.
    ///
    /// Optional resources that are absent load as an empty tree rather
    /// than failing.
    fn load(&self) -> Result<serde_json::Map<String, Value>, ConfigError>;

    /// Whether a change to the underlying resource can be observed by
    /// reloading. File sources opt in via `reload_on_change`.
    fn reloadable(&self) -> bool {
        false
    }
}

/// Merges `overlay` into `base`, recursing into nested maps.
pub(crate) fn deep_merge(base: &mut Map, overlay: Map) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(Value::Object(base_map)), Value::Object(overlay_map)) => {
                deep_merge(base_map, overlay_map);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

/// Inserts `value` at a colon-separated key path, creating intermediate
/// maps as needed. A non-map value sitting on an intermediate segment is
/// replaced by a map.
pub(crate) fn set_at_path(root: &mut Map, path: &str, value: Value) {
    let mut segments = path.split(':').peekable();
    let mut current = root;

    while let Some(segment) = segments.next() {
        if segments.peek().is_none() {
            current.insert(segment.to_string(), value);
            return;
        }

        if !matches!(current.get(segment), Some(Value::Object(_))) {
            current.insert(segment.to_string(), Value::Object(Map::new()));
        }

        let Some(Value::Object(next)) = current.get_mut(segment) else {
            return;
        };
        current = next;
    }
}
