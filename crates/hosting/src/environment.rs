//! Host environment resolution.
//!
//! Responsibilities:
//! - Resolve the environment name from a configurable environment variable.
//! - Derive the application name from the running executable.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - The environment name defaults to `"production"` when the variable is
//!   absent.
//! - The Development check is an exact string match.

use std::path::{Path, PathBuf};

/// Environment variable consulted when the caller does not name one.
pub const DEFAULT_ENVIRONMENT_VARIABLE: &str = "NETCORE_ENVIRONMENT";

/// Environment name that enables user secrets and the debug log sink.
pub const DEVELOPMENT: &str = "Development";

/// Environment name used when the variable is unset.
pub const PRODUCTION: &str = "production";

/// Identity of the running host: application name, environment name, and
/// the content root against which relative configuration paths resolve.
///
/// Derived once per build and read-only thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEnvironment {
    application_name: String,
    environment_name: String,
    content_root: PathBuf,
}

impl HostEnvironment {
    pub fn new(
        application_name: impl Into<String>,
        environment_name: impl Into<String>,
        content_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            application_name: application_name.into(),
            environment_name: environment_name.into(),
            content_root: content_root.into(),
        }
    }

    pub fn application_name(&self) -> &str {
        &self.application_name
    }

    pub fn environment_name(&self) -> &str {
        &self.environment_name
    }

    pub fn content_root(&self) -> &Path {
        &self.content_root
    }

    /// Whether this is the Development environment.
    pub fn is_development(&self) -> bool {
        self.environment_name == DEVELOPMENT
    }
}

/// Read an environment variable, returning None if unset, empty, or
/// whitespace-only. The returned value is trimmed.
pub(crate) fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Resolves the environment name from the named variable, falling back to
/// the default variable when the name is blank and to `"production"` when
/// the variable is unset.
pub(crate) fn resolve_environment_name(var_name: Option<&str>) -> String {
    let var = match var_name {
        Some(name) if !name.trim().is_empty() => name,
        _ => DEFAULT_ENVIRONMENT_VARIABLE,
    };
    env_var_or_none(var).unwrap_or_else(|| PRODUCTION.to_string())
}

/// Derives the application name from the running executable's file stem.
///
/// Best-effort: an unresolvable executable path yields a fixed fallback
/// rather than an error.
pub(crate) fn resolve_application_name() -> String {
    std::env::current_exe()
        .ok()
        .as_deref()
        .and_then(Path::file_stem)
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "application".to_string())
}
