//! Error types for configuration loading.
//!
//! Invariants:
//! - All variants carry context for debugging (paths, argument text).
//! - Parse errors never include file content in their message, only the
//!   path and the position reported by the parser.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or reading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("required configuration file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read configuration file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse configuration file at {path} (line {line}, column {column})")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
    },

    #[error("failed to deserialize configuration section '{key}': {message}")]
    Deserialize { key: String, message: String },

    #[error("unrecognized command-line argument: '{arg}' (expected --key=value, --key value, or key=value)")]
    InvalidArgument { arg: String },

    #[error("command-line switch '{arg}' is missing a value")]
    MissingArgumentValue { arg: String },
}
