//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns for the bike-share registry.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration: defaults, TOML, environment |
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context extension for foreign errors |
//! | [`bootstrap`] | Record store selection and service wiring |
//! | [`constants`] | Infrastructure constants |

// Force linkme registration of all providers and record stores
extern crate bikes_providers;

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use bootstrap::init_service;
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
