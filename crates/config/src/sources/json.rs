//! JSON file configuration source.
//!
//! Responsibilities:
//! - Load a JSON document into a key tree.
//! - Distinguish optional files (missing is fine) from required ones.
//! - Record whether the file should be observed for changes on reload.
//!
//! Invariants:
//! - A missing optional file loads as an empty tree and is logged at debug.
//! - Malformed JSON always surfaces as `ConfigError::Parse`; content is
//!   never swallowed or defaulted.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::source::{ConfigurationSource, Map};
use crate::ConfigError;

/// A configuration source backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    optional: bool,
    reload_on_change: bool,
    name: String,
}

impl JsonFileSource {
    /// Creates a source for the given file.
    ///
    /// If `optional` is false, a missing file fails the build.
    pub fn new(path: impl AsRef<Path>, optional: bool) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = format!("json:{}", path.display());
        Self {
            path,
            optional,
            reload_on_change: false,
            name,
        }
    }

    /// Requests that changes to the file be picked up by
    /// [`Configuration::reload`](crate::Configuration::reload).
    pub fn reload_on_change(mut self, reload: bool) -> Self {
        self.reload_on_change = reload;
        self
    }

    /// The file path this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigurationSource for JsonFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<Map, ConfigError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if self.optional {
                    debug!(path = %self.path.display(), "optional configuration file not found, skipping");
                    return Ok(Map::new());
                }
                return Err(ConfigError::FileNotFound {
                    path: self.path.clone(),
                });
            }
            Err(e) => {
                return Err(ConfigError::Read {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        let value: Value =
            serde_json::from_str(&contents).map_err(|e| ConfigError::Parse {
                path: self.path.clone(),
                line: e.line(),
                column: e.column(),
            })?;

        match value {
            Value::Object(map) => Ok(map),
            // A top-level non-object document has no keys to contribute.
            _ => Ok(Map::new()),
        }
    }

    fn reloadable(&self) -> bool {
        self.reload_on_change
    }
}
