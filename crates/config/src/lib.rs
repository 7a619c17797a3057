//! Layered configuration for application hosts.
//!
//! This crate provides an ordered pipeline of configuration sources (JSON
//! files, environment variables, command-line arguments, user secrets)
//! merged into a single key tree, with later sources overriding earlier
//! ones.

mod builder;
mod configuration;
mod error;
mod source;
pub mod sources;

pub use builder::ConfigurationBuilder;
pub use configuration::{ConfigSection, Configuration};
pub use error::ConfigError;
pub use source::ConfigurationSource;
