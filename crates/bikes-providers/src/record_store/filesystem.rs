//! Directory-backed record store

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use bikes_domain::constants::RECORD_EXTENSION;
use bikes_domain::error::{Error, Result};
use bikes_domain::ports::RecordStore;
use serde_json::Value;
use walkdir::WalkDir;

use crate::constants::FILESYSTEM_BACKEND;

/// Store reading `<data_dir>/<system>.json`
///
/// Only the top level of the directory is considered. Names that would
/// escape the directory are reported as not found.
#[derive(Debug, Clone)]
pub struct FilesystemRecordStore {
    data_dir: PathBuf,
}

impl FilesystemRecordStore {
    /// Create a store over `data_dir`
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Directory documents are read from
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn document_path(&self, system: &str) -> Option<PathBuf> {
        let escapes = system.is_empty()
            || system.contains(['/', '\\', '\0'])
            || system == "."
            || system == "..";
        if escapes {
            return None;
        }
        Some(
            self.data_dir
                .join(format!("{system}.{RECORD_EXTENSION}")),
        )
    }
}

impl RecordStore for FilesystemRecordStore {
    fn load(&self, system: &str) -> Result<Value> {
        let path = self
            .document_path(system)
            .ok_or_else(|| Error::record_not_found(system))?;

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No system definition file");
                return Err(Error::record_not_found(system));
            }
            Err(err) => {
                return Err(Error::io_with_source(
                    format!("Failed to read {}", path.display()),
                    err,
                ));
            }
        };

        Ok(serde_json::from_str(&contents)?)
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in WalkDir::new(&self.data_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|err| {
                Error::io(format!(
                    "Failed to list {}: {}",
                    self.data_dir.display(),
                    err
                ))
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(RECORD_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        tracing::debug!(data_dir = %self.data_dir.display(), systems = names.len(), "Listed system definitions");
        Ok(names)
    }

    fn backend_name(&self) -> &str {
        FILESYSTEM_BACKEND
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use bikes_application::ports::registry::{RECORD_STORES, RecordStoreConfig, RecordStoreEntry};

#[linkme::distributed_slice(RECORD_STORES)]
static FILESYSTEM_STORE: RecordStoreEntry = RecordStoreEntry {
    name: FILESYSTEM_BACKEND,
    description: "System definitions read from a directory of JSON files",
    factory: |config: &RecordStoreConfig| {
        let data_dir = config
            .data_dir
            .as_ref()
            .ok_or_else(|| "filesystem record store requires data_dir".to_string())?;
        if !data_dir.is_dir() {
            return Err(format!("data_dir {} is not a directory", data_dir.display()));
        }
        Ok(std::sync::Arc::new(FilesystemRecordStore::new(data_dir)))
    },
};
