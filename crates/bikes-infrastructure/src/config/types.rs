//! Configuration types

use std::path::PathBuf;

use bikes_application::ports::registry::RecordStoreConfig;
use bikes_providers::constants::BUNDLED_BACKEND;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LOG_LEVEL;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Record store selection
    pub records: RecordsConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to a daily rolled file in addition to stdout
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// Record store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordsConfig {
    /// Registered backend name ("bundled", "filesystem")
    pub backend: String,

    /// Directory of `*.json` documents for the filesystem backend
    pub data_dir: Option<PathBuf>,
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            backend: BUNDLED_BACKEND.to_string(),
            data_dir: None,
        }
    }
}

impl RecordsConfig {
    /// Registry configuration for this selection
    pub fn to_store_config(&self) -> RecordStoreConfig {
        let config = RecordStoreConfig::new(&self.backend);
        match &self.data_dir {
            Some(data_dir) => config.with_data_dir(data_dir),
            None => config,
        }
    }
}
