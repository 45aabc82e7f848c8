//! Bike-share registry service
//!
//! Binds one record store to one provider registry and exposes the public
//! entry points. The service holds no cache: every call reloads the document
//! from the store, so callers wanting repeated lookups keep their own cache
//! keyed by system name.

use std::sync::Arc;

use bikes_domain::error::Result;
use bikes_domain::ports::{BikeShareSystem, RecordStore};
use bikes_domain::value_objects::SystemDefinition;

use crate::ports::registry::ProviderRegistry;
use crate::use_cases::record_loader::{list_system_names, load_definition};
use crate::use_cases::resolver::Resolver;
use crate::use_cases::tag_index::list_tags;

/// Entry points over a record store and a provider registry
#[derive(Clone)]
pub struct BikeShareService {
    store: Arc<dyn RecordStore>,
    registry: Arc<ProviderRegistry>,
}

impl BikeShareService {
    /// Create a service from its collaborators
    pub fn new(store: Arc<dyn RecordStore>, registry: Arc<ProviderRegistry>) -> Self {
        Self { store, registry }
    }

    /// Create a service over the process-wide provider registry
    pub fn with_global_registry(store: Arc<dyn RecordStore>) -> Result<Self> {
        Ok(Self::new(store, ProviderRegistry::global()?))
    }

    /// Every system name available in the store
    pub fn list_system_names(&self) -> Result<Vec<String>> {
        list_system_names(self.store.as_ref())
    }

    /// Every tag of `system`
    pub fn list_tags(&self, system: &str) -> Result<Vec<String>> {
        list_tags(self.store.as_ref(), system)
    }

    /// Parsed definition of `system`
    pub fn definition(&self, system: &str) -> Result<SystemDefinition> {
        load_definition(self.store.as_ref(), system)
    }

    /// Construct the provider for `tag` in `system`
    pub fn resolve(
        &self,
        system: &str,
        tag: &str,
        key: Option<&str>,
    ) -> Result<Box<dyn BikeShareSystem>> {
        let definition = self.definition(system)?;
        Resolver::new(&self.registry).resolve(&definition, tag, key)
    }

    /// The store documents are loaded from
    pub fn store(&self) -> &Arc<dyn RecordStore> {
        &self.store
    }

    /// The registry class names are resolved against
    pub fn registry(&self) -> &Arc<ProviderRegistry> {
        &self.registry
    }
}

impl std::fmt::Debug for BikeShareService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BikeShareService")
            .field("backend", &self.store.backend_name())
            .field("providers", &self.registry.len())
            .finish()
    }
}
