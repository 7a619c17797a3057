//! User-secrets configuration source.
//!
//! Responsibilities:
//! - Load a developer-local `secrets.json` keyed by application identity.
//! - Resolve the store location with the `directories` crate.
//!
//! Does NOT handle:
//! - Writing or managing secrets; this is a read-only source.
//!
//! Invariants:
//! - An unresolvable application identity or a missing store loads as an
//!   empty tree, silently (logged at debug only). Secrets are a
//!   development convenience, never a startup requirement.
//! - Malformed JSON in an existing store still surfaces as a parse error.

use std::path::PathBuf;

use tracing::debug;

use crate::source::{ConfigurationSource, Map};
use crate::sources::JsonFileSource;
use crate::ConfigError;

/// File name of the per-application secrets store.
const SECRETS_FILE: &str = "secrets.json";

/// A configuration source over the developer-local secrets store.
///
/// The store lives under the platform config directory for the
/// application, e.g. `~/.config/<application>/secrets.json` on Linux.
#[derive(Debug, Clone)]
pub struct UserSecretsSource {
    application: String,
}

impl UserSecretsSource {
    /// Creates a source for the given application identity.
    pub fn new(application: impl Into<String>) -> Self {
        Self {
            application: application.into(),
        }
    }

    /// Resolves the store path, or `None` when the platform config
    /// directory cannot be determined for this process.
    pub fn store_path(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", &self.application)
            .map(|dirs| dirs.config_dir().join(SECRETS_FILE))
    }
}

impl ConfigurationSource for UserSecretsSource {
    fn name(&self) -> &str {
        "user-secrets"
    }

    fn load(&self) -> Result<Map, ConfigError> {
        let Some(path) = self.store_path() else {
            debug!(
                application = %self.application,
                "could not resolve application config directory, skipping user secrets"
            );
            return Ok(Map::new());
        };

        JsonFileSource::new(path, true).load()
    }

    fn reloadable(&self) -> bool {
        true
    }
}
