//! Built-in configuration sources.

mod command_line;
mod env;
mod json;
mod memory;
mod user_secrets;

pub use command_line::CommandLineSource;
pub use env::EnvSource;
pub use json::JsonFileSource;
pub use memory::MemorySource;
pub use user_secrets::UserSecretsSource;
