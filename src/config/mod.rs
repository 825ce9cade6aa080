//! Application configuration (`~/.config/confusion/config.toml`).

pub mod loader;
pub mod types;

pub use loader::ConfigError;
pub use types::{Config, LoggingConfig, SeedConfig};
