//! Record store port

use serde_json::Value;

use crate::error::Result;

/// Source of system definition documents
///
/// Names passed to [`RecordStore::load`] are already normalised (extension
/// stripped). Implementations report a missing document as
/// [`Error::RecordNotFound`](crate::Error::RecordNotFound) and a document that
/// is not valid JSON as [`Error::Json`](crate::Error::Json), never the other
/// way round.
pub trait RecordStore: Send + Sync {
    /// Load and parse the document stored under `system`
    fn load(&self, system: &str) -> Result<Value>;

    /// Enumerate stored document names without extension
    ///
    /// The order is the backend's natural listing order and carries no meaning.
    fn list(&self) -> Result<Vec<String>>;

    /// Backend name used in logs and configuration
    fn backend_name(&self) -> &str;
}
