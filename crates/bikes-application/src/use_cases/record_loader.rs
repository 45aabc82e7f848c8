//! Record loading

use bikes_domain::error::Result;
use bikes_domain::ports::RecordStore;
use bikes_domain::value_objects::{SystemDefinition, normalize_system_name};

/// Load and parse the system definition stored under `system`
///
/// Any extension on `system` is stripped first, so `"bixi.json"` and `"bixi"`
/// load the same document. Documents are reloaded on every call.
pub fn load_definition(store: &dyn RecordStore, system: &str) -> Result<SystemDefinition> {
    let name = normalize_system_name(system);
    let document = store.load(name).inspect_err(|err| {
        tracing::warn!(system = name, backend = store.backend_name(), error = %err, "Failed to load system definition");
    })?;
    let definition = SystemDefinition::from_value(name, document)?;
    tracing::debug!(
        system = name,
        backend = store.backend_name(),
        instances = definition.len(),
        namespaced = definition.is_namespaced(),
        "System definition loaded"
    );
    Ok(definition)
}

/// Every system name available in `store`, in the store's listing order
pub fn list_system_names(store: &dyn RecordStore) -> Result<Vec<String>> {
    store.list()
}
