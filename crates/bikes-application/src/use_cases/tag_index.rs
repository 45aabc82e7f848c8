//! Tag enumeration

use bikes_domain::error::Result;
use bikes_domain::ports::RecordStore;

use crate::use_cases::record_loader::load_definition;

/// List every tag of `system`
///
/// Flat documents yield tags in document order. Namespaced documents yield
/// them grouped by class name, classes and instances both in document order.
pub fn list_tags(store: &dyn RecordStore, system: &str) -> Result<Vec<String>> {
    let definition = load_definition(store, system)?;
    Ok(definition.tags().into_iter().map(str::to_string).collect())
}
