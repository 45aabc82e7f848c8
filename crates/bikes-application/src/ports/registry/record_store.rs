//! Record Store Registry
//!
//! Auto-registration system for record store backends using linkme
//! distributed slices. Backends register themselves via
//! `#[linkme::distributed_slice(RECORD_STORES)]` and are selected by name
//! from configuration.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use bikes_domain::ports::RecordStore;

/// Configuration for record store creation
///
/// Backends read the fields they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct RecordStoreConfig {
    /// Backend name (e.g., "bundled", "filesystem", "memory")
    pub backend: String,
    /// Directory holding `*.json` documents
    pub data_dir: Option<PathBuf>,
}

impl RecordStoreConfig {
    /// Create a new config with the given backend name
    pub fn new(backend: impl Into<String>) -> Self {
        Self {
            backend: backend.into(),
            ..Default::default()
        }
    }

    /// Set the data directory
    pub fn with_data_dir(mut self, data_dir: impl AsRef<Path>) -> Self {
        self.data_dir = Some(data_dir.as_ref().to_path_buf());
        self
    }
}

/// Registry entry for record store backends
pub struct RecordStoreEntry {
    /// Unique backend name (e.g., "bundled", "filesystem")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create the store
    pub factory: fn(&RecordStoreConfig) -> Result<Arc<dyn RecordStore>, String>,
}

#[linkme::distributed_slice]
pub static RECORD_STORES: [RecordStoreEntry] = [..];

/// Resolve record store by backend name from registry
///
/// # Returns
/// * `Ok(Arc<dyn RecordStore>)` - Created store
/// * `Err(String)` - Error message if the backend is unknown or creation failed
pub fn resolve_record_store(config: &RecordStoreConfig) -> Result<Arc<dyn RecordStore>, String> {
    let backend = &config.backend;

    for entry in RECORD_STORES {
        if entry.name == backend {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = RECORD_STORES.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown record store backend '{}'. Available backends: {:?}",
        backend, available
    ))
}

/// List all registered record store backends
///
/// Returns a list of (name, description) tuples.
pub fn list_record_stores() -> Vec<(&'static str, &'static str)> {
    RECORD_STORES
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
