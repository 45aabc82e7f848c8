//! Record store compiled into the binary

use bikes_domain::error::{Error, Result};
use bikes_domain::ports::RecordStore;
use serde_json::Value;

use crate::constants::BUNDLED_BACKEND;

/// System definitions shipped with the crate, in bundle order
static BUNDLED_RECORDS: &[(&str, &str)] = &[
    ("bixi", include_str!("../../data/bixi.json")),
    ("bcycle", include_str!("../../data/bcycle.json")),
    ("smartbike", include_str!("../../data/smartbike.json")),
    ("cyclocity", include_str!("../../data/cyclocity.json")),
    ("bicincitta", include_str!("../../data/bicincitta.json")),
    ("domoblue", include_str!("../../data/domoblue.json")),
    ("gewista_citybike", include_str!("../../data/gewista_citybike.json")),
    ("decobike", include_str!("../../data/decobike.json")),
];

/// Read-only store over the documents bundled at compile time
///
/// Documents are parsed on every load, like any other store.
#[derive(Clone, Copy)]
pub struct BundledRecordStore {
    records: &'static [(&'static str, &'static str)],
}

impl BundledRecordStore {
    /// Store over the crate's bundled documents
    pub fn new() -> Self {
        Self {
            records: BUNDLED_RECORDS,
        }
    }
}

impl std::fmt::Debug for BundledRecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BundledRecordStore")
            .field("records", &self.records.len())
            .finish()
    }
}

impl Default for BundledRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for BundledRecordStore {
    fn load(&self, system: &str) -> Result<Value> {
        let (_, document) = self
            .records
            .iter()
            .find(|(name, _)| *name == system)
            .ok_or_else(|| Error::record_not_found(system))?;
        Ok(serde_json::from_str(document)?)
    }

    fn list(&self) -> Result<Vec<String>> {
        Ok(self
            .records
            .iter()
            .map(|(name, _)| (*name).to_string())
            .collect())
    }

    fn backend_name(&self) -> &str {
        BUNDLED_BACKEND
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use bikes_application::ports::registry::{RECORD_STORES, RecordStoreConfig, RecordStoreEntry};

#[linkme::distributed_slice(RECORD_STORES)]
static BUNDLED_STORE: RecordStoreEntry = RecordStoreEntry {
    name: BUNDLED_BACKEND,
    description: "System definitions compiled into the binary",
    factory: |_config: &RecordStoreConfig| Ok(std::sync::Arc::new(BundledRecordStore::new())),
};
