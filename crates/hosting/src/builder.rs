//! Host builder implementation.
//!
//! Responsibilities:
//! - Chain the conventional setup steps: environment resolution,
//!   configuration layering, logging registration.
//! - Build the final `Host` holding the environment and configuration.
//!
//! Does NOT handle:
//! - Configuration source loading (see `hostkit-config`).
//! - Running the application; the host carries no lifecycle.
//!
//! Invariants:
//! - `resolve_environment` runs before `configure_configuration` and
//!   `configure_logging` take any environment-conditional decision; the
//!   composite `default_builder` enforces that order.
//! - Setup is a strictly linear, one-shot sequence: no branching back,
//!   no retry.

use std::path::{Path, PathBuf};

use hostkit_config::{Configuration, ConfigurationBuilder};
use tracing::debug;

use crate::environment::{
    resolve_application_name, resolve_environment_name, HostEnvironment, DEVELOPMENT, PRODUCTION,
};
use crate::error::HostError;
use crate::logging;

/// Base settings file name; the environment-specific variant is derived
/// from it.
const SETTINGS_FILE: &str = "appsettings.json";

/// Configuration section consulted for logging levels.
const LOGGING_SECTION: &str = "Logging";

/// Builder assembling a host from conventional defaults.
///
/// The builder is exclusively owned and mutated through chained calls;
/// nothing here is shared or thread-safe, and nothing runs until
/// [`build`](Self::build).
#[derive(Debug)]
#[must_use = "builders do nothing until .build() is called"]
pub struct HostBuilder {
    content_root: PathBuf,
    application_name: String,
    environment_name: String,
    configuration: ConfigurationBuilder,
    logging_enabled: bool,
}

impl Default for HostBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HostBuilder {
    /// Creates a builder with the current directory as content root and
    /// the `"production"` environment.
    pub fn new() -> Self {
        Self {
            content_root: PathBuf::from("."),
            application_name: resolve_application_name(),
            environment_name: PRODUCTION.to_string(),
            configuration: ConfigurationBuilder::new(),
            logging_enabled: false,
        }
    }

    /// Sets the base directory against which relative configuration file
    /// paths are resolved.
    pub fn with_content_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.content_root = path.into();
        self
    }

    /// Resolves the application name from the running executable and the
    /// environment name from the named environment variable.
    ///
    /// A `None` or blank `var_name` falls back to
    /// [`DEFAULT_ENVIRONMENT_VARIABLE`](crate::DEFAULT_ENVIRONMENT_VARIABLE);
    /// an unset variable yields `"production"`. Applied once, before any
    /// environment-conditional step.
    pub fn resolve_environment(mut self, var_name: Option<&str>) -> Self {
        self.application_name = resolve_application_name();
        self.environment_name = resolve_environment_name(var_name);
        self
    }

    /// Registers the conventional configuration layers, lowest precedence
    /// first:
    ///
    /// 1. `appsettings.json` (optional, reloadable)
    /// 2. `appsettings.<environment>.json` (optional, reloadable)
    /// 3. user secrets, Development only
    /// 4. environment variables, unprefixed
    /// 5. command-line arguments, only when `args` is `Some`
    pub fn configure_configuration(mut self, args: Option<Vec<String>>) -> Self {
        let environment_file = format!("appsettings.{}.json", self.environment_name);

        let mut configuration = std::mem::take(&mut self.configuration)
            .add_json_file(self.content_root.join(SETTINGS_FILE), true, true)
            .add_json_file(self.content_root.join(environment_file), true, true);

        if self.is_development() {
            configuration = configuration.add_user_secrets(self.application_name.clone());
        }

        configuration = configuration.add_env_vars();

        if let Some(args) = args {
            configuration = configuration.add_command_line(args);
        }

        self.configuration = configuration;
        self
    }

    /// Requests logging registration at build time: a console sink always,
    /// a debug sink in Development, with levels read from the `Logging`
    /// configuration section.
    pub fn configure_logging(mut self) -> Self {
        self.logging_enabled = true;
        self
    }

    /// Caller extension point over the underlying configuration builder.
    pub fn configure(
        mut self,
        f: impl FnOnce(ConfigurationBuilder) -> ConfigurationBuilder,
    ) -> Self {
        self.configuration = f(std::mem::take(&mut self.configuration));
        self
    }

    /// A snapshot of the environment as currently resolved.
    pub fn environment(&self) -> HostEnvironment {
        HostEnvironment::new(
            self.application_name.clone(),
            self.environment_name.clone(),
            self.content_root.clone(),
        )
    }

    fn is_development(&self) -> bool {
        self.environment_name == DEVELOPMENT
    }

    /// Loads the configuration, installs logging if requested, and
    /// returns the built host.
    ///
    /// Logging runs after configuration so level filters can be read from
    /// the attached `Logging` section.
    pub fn build(self) -> Result<Host, HostError> {
        let configuration = self.configuration.build()?;

        if self.logging_enabled {
            let directives = logging::filter_directives(&configuration.section(LOGGING_SECTION));
            logging::install(
                &directives,
                logging::Sinks::for_environment_name(&self.environment_name),
            )?;
        }

        debug!(
            application = %self.application_name,
            environment = %self.environment_name,
            "host configuration loaded"
        );

        Ok(Host {
            environment: HostEnvironment::new(
                self.application_name,
                self.environment_name,
                self.content_root,
            ),
            configuration,
        })
    }
}

/// A built host: resolved environment plus merged configuration.
#[derive(Debug)]
pub struct Host {
    environment: HostEnvironment,
    configuration: Configuration,
}

impl Host {
    pub fn environment(&self) -> &HostEnvironment {
        &self.environment
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Mutable access for explicit configuration reloads.
    pub fn configuration_mut(&mut self) -> &mut Configuration {
        &mut self.configuration
    }
}

/// Builds a host builder with conventional defaults: content root set to
/// the directory containing the running executable, then environment
/// resolution, configuration layering, and logging registration, in that
/// order.
///
/// The builder is returned unbuilt so callers can extend it before
/// calling [`HostBuilder::build`].
pub fn default_builder(args: Option<Vec<String>>) -> HostBuilder {
    let content_root = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));

    HostBuilder::new()
        .with_content_root(content_root)
        .resolve_environment(None)
        .configure_configuration(args)
        .configure_logging()
}
