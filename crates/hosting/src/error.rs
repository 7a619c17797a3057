use hostkit_config::ConfigError;
use thiserror::Error;

/// Errors surfaced while building a host.
#[derive(Error, Debug)]
pub enum HostError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid logging filter built from the Logging section: {message}")]
    InvalidLogFilter { message: String },
}
