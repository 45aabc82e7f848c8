//! In-memory record store

use bikes_domain::error::{Error, Result};
use bikes_domain::ports::RecordStore;
use serde_json::Value;

use crate::constants::MEMORY_BACKEND;

/// Store over documents supplied by the caller
///
/// Documents are kept as JSON text and parsed on load, so malformed text
/// surfaces as a parse error exactly as it would from disk.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    records: Vec<(String, String)>,
}

impl InMemoryRecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document, replacing any document with the same name
    pub fn with_record(self, system: impl Into<String>, document: &Value) -> Self {
        self.with_raw_record(system, document.to_string())
    }

    /// Add raw JSON text, replacing any document with the same name
    pub fn with_raw_record(mut self, system: impl Into<String>, json: impl Into<String>) -> Self {
        let system = system.into();
        let json = json.into();
        match self.records.iter_mut().find(|(name, _)| *name == system) {
            Some((_, existing)) => *existing = json,
            None => self.records.push((system, json)),
        }
        self
    }

    /// Number of stored documents
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn load(&self, system: &str) -> Result<Value> {
        let (_, json) = self
            .records
            .iter()
            .find(|(name, _)| name == system)
            .ok_or_else(|| Error::record_not_found(system))?;
        Ok(serde_json::from_str(json)?)
    }

    fn list(&self) -> Result<Vec<String>> {
        Ok(self.records.iter().map(|(name, _)| name.clone()).collect())
    }

    fn backend_name(&self) -> &str {
        MEMORY_BACKEND
    }
}
