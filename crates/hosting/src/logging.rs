//! Logging registration driven by the `Logging` configuration section.
//!
//! Responsibilities:
//! - Decide which sinks are active for an environment (console always,
//!   debug only in Development).
//! - Build an `EnvFilter` from `Logging:LogLevel` keys.
//! - Install the global tracing subscriber.
//!
//! Does NOT handle:
//! - Reading configuration (the section is handed in, so this necessarily
//!   runs after configuration has been attached).
//!
//! Invariants:
//! - A missing `Logging` section means the `info` level.
//! - Installation is idempotent per process: a subscriber installed by an
//!   earlier build is left in place.

use hostkit_config::ConfigSection;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::HostError;
use crate::DEVELOPMENT;

/// Level used when the configuration carries no `Logging:LogLevel:Default`.
const DEFAULT_LEVEL: &str = "info";

/// The sinks registered for a given environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Sinks {
    pub console: bool,
    pub debug: bool,
}

impl Sinks {
    pub fn for_environment_name(environment_name: &str) -> Self {
        Self {
            console: true,
            debug: environment_name == DEVELOPMENT,
        }
    }
}

/// Builds `EnvFilter` directives from a `Logging` section.
///
/// `LogLevel:Default` sets the baseline; every other `LogLevel` key is a
/// per-target directive.
pub(crate) fn filter_directives(section: &ConfigSection) -> String {
    let levels = section.section("LogLevel");

    let mut directives = vec![levels
        .get_string("Default")
        .as_deref()
        .map(map_level)
        .unwrap_or_else(|| DEFAULT_LEVEL.to_string())];

    for target in levels.keys() {
        if target == "Default" {
            continue;
        }
        if let Some(level) = levels.get_string(target) {
            directives.push(format!("{}={}", target, map_level(&level)));
        }
    }

    directives.join(",")
}

/// Maps configured level names onto tracing level filters.
///
/// Accepts the tracing spellings directly and translates the conventional
/// configuration spellings (`Information`, `Warning`, `Critical`, `None`).
fn map_level(raw: &str) -> String {
    match raw.to_ascii_lowercase().as_str() {
        "information" => "info".to_string(),
        "warning" => "warn".to_string(),
        "critical" => "error".to_string(),
        "none" => "off".to_string(),
        other => other.to_string(),
    }
}

/// Installs the global subscriber with the given filter and sinks.
///
/// If a global subscriber is already installed in this process, the
/// existing one is kept.
pub(crate) fn install(directives: &str, sinks: Sinks) -> Result<(), HostError> {
    let filter = EnvFilter::try_new(directives).map_err(|e| HostError::InvalidLogFilter {
        message: e.to_string(),
    })?;

    let console = sinks.console.then(|| fmt::layer());
    let debug = sinks.debug.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(debug)
        .try_init();

    Ok(())
}
