//! Conventional application-host bootstrapping.
//!
//! Responsibilities:
//! - Assemble a host builder with conventional defaults: content-root
//!   resolution, environment-name detection, layered configuration, and
//!   logging registration.
//!
//! Does NOT handle:
//! - Application lifecycle management or dependency injection.
//! - Watching configuration files for changes (reload is explicit).
//!
//! Invariants:
//! - Environment resolution completes before any environment-conditional
//!   configuration or logging decision.
//!
//! ## Example
//!
//! ```no_run
//! let host = hostkit::default_builder(Some(std::env::args().skip(1).collect()))
//!     .build()?;
//!
//! if let Some(greeting) = host.configuration().get_string("Greeting") {
//!     tracing::info!(%greeting, "configured greeting");
//! }
//! # Ok::<(), hostkit::HostError>(())
//! ```

mod builder;
mod environment;
mod error;
mod logging;

pub use builder::{default_builder, Host, HostBuilder};
pub use environment::{HostEnvironment, DEFAULT_ENVIRONMENT_VARIABLE, DEVELOPMENT, PRODUCTION};
pub use error::HostError;

pub use hostkit_config::{sources, ConfigError, ConfigSection, Configuration, ConfigurationBuilder};
