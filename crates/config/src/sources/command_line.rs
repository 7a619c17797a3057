//! Command-line argument configuration source.
//!
//! Responsibilities:
//! - Tokenize an ordered argument sequence into configuration keys.
//! - Accept `--key=value`, `--key value`, and bare `key=value` forms.
//!
//! Invariants:
//! - Keys may be colon-separated paths (`--Logging:LogLevel:Default=warn`).
//! - A switch with no value is the one surfaced failure mode of the
//!   bootstrap layer; it is never silently dropped.
//! - Later arguments override earlier ones for the same key.

use serde_json::Value;

use crate::source::{set_at_path, ConfigurationSource, Map};
use crate::ConfigError;

/// A configuration source over command-line arguments.
#[derive(Debug, Clone)]
pub struct CommandLineSource {
    args: Vec<String>,
}

impl CommandLineSource {
    /// Creates a source over the given argument sequence.
    ///
    /// Pass the arguments only, without the executable name.
    pub fn new(args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl ConfigurationSource for CommandLineSource {
    fn name(&self) -> &str {
        "command-line"
    }

    fn load(&self) -> Result<Map, ConfigError> {
        let mut map = Map::new();
        let mut iter = self.args.iter();

        while let Some(arg) = iter.next() {
            if let Some(key) = arg.strip_prefix("--") {
                if let Some((key, value)) = key.split_once('=') {
                    set_at_path(&mut map, key, Value::String(value.to_string()));
                } else {
                    let value = iter.next().ok_or_else(|| ConfigError::MissingArgumentValue {
                        arg: arg.clone(),
                    })?;
                    set_at_path(&mut map, key, Value::String(value.clone()));
                }
            } else if let Some((key, value)) = arg.split_once('=') {
                set_at_path(&mut map, key, Value::String(value.to_string()));
            } else {
                return Err(ConfigError::InvalidArgument { arg: arg.clone() });
            }
        }

        Ok(map)
    }
}
