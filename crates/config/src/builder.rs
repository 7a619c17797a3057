//! Configuration builder implementation.
//!
//! Responsibilities:
//! - Collect configuration sources in registration order.
//! - Build the merged `Configuration` snapshot.
//!
//! Does NOT handle:
//! - Source-specific loading logic (see `sources/`).
//! - Key lookup on the merged tree (see `configuration.rs`).
//!
//! Invariants:
//! - Sources are applied in registration order; later sources override
//!   earlier ones for duplicate keys.
//! - An omitted source does not affect the relative precedence of the
//!   remaining ones.

use std::path::Path;

use tracing::debug;

use crate::configuration::Configuration;
use crate::source::{deep_merge, ConfigurationSource, Map};
use crate::sources::{
    CommandLineSource, EnvSource, JsonFileSource, MemorySource, UserSecretsSource,
};
use crate::ConfigError;

/// Builder for a layered [`Configuration`].
///
/// ## Example
///
/// ```no_run
/// use hostkit_config::ConfigurationBuilder;
///
/// let config = ConfigurationBuilder::new()
///     .add_json_file("appsettings.json", true, true)
///     .add_env_vars()
///     .add_command_line(std::env::args().skip(1))
///     .build()?;
/// # Ok::<(), hostkit_config::ConfigError>(())
/// ```
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct ConfigurationBuilder {
    sources: Vec<Box<dyn ConfigurationSource>>,
}

impl ConfigurationBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers any configuration source as the next (higher-precedence)
    /// layer.
    pub fn add_source(mut self, source: impl ConfigurationSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Registers a JSON file layer.
    ///
    /// `optional` files that are missing are skipped; `reload_on_change`
    /// marks the file for [`Configuration::reload`].
    pub fn add_json_file(
        self,
        path: impl AsRef<Path>,
        optional: bool,
        reload_on_change: bool,
    ) -> Self {
        self.add_source(JsonFileSource::new(path, optional).reload_on_change(reload_on_change))
    }

    /// Registers all process environment variables, unprefixed.
    pub fn add_env_vars(self) -> Self {
        self.add_source(EnvSource::new())
    }

    /// Registers environment variables carrying the given prefix.
    pub fn add_env_vars_with_prefix(self, prefix: impl Into<String>) -> Self {
        self.add_source(EnvSource::with_prefix(prefix))
    }

    /// Registers a command-line argument layer.
    pub fn add_command_line(self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.add_source(CommandLineSource::new(args))
    }

    /// Registers the developer-local secrets store for the given
    /// application identity.
    pub fn add_user_secrets(self, application: impl Into<String>) -> Self {
        self.add_source(UserSecretsSource::new(application))
    }

    /// Registers an in-memory layer.
    pub fn add_in_memory(self, source: MemorySource) -> Self {
        self.add_source(source)
    }

    /// Loads every source in order and merges the results into a
    /// [`Configuration`] snapshot.
    pub fn build(self) -> Result<Configuration, ConfigError> {
        let mut root = Map::new();

        for source in &self.sources {
            let layer = source.load()?;
            debug!(source = source.name(), keys = layer.len(), "loaded configuration layer");
            deep_merge(&mut root, layer);
        }

        Ok(Configuration::new(self.sources, root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_later_source_overrides_earlier() {
        let config = ConfigurationBuilder::new()
            .add_in_memory(MemorySource::new().with("K", "1").with("Only:First", "a"))
            .add_in_memory(MemorySource::new().with("K", "2"))
            .build()
            .unwrap();

        assert_eq!(config.get_string("K").as_deref(), Some("2"));
        assert_eq!(config.get_string("Only:First").as_deref(), Some("a"));
    }

    #[test]
    fn test_empty_builder_builds_empty_configuration() {
        let config = ConfigurationBuilder::new().build().unwrap();
        assert_eq!(config.get("anything"), None::<&Value>);
    }
}
