//! Configuration management
//!
//! Defaults, then a TOML file, then `BIKES__`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig, RecordsConfig};
