//! Tag resolution
//!
//! Given a parsed definition, locate the instance carrying a tag, map its
//! class name to a registered provider type, enforce the credential
//! requirement and construct the provider.
//!
//! The tag is searched first: a tag missing from the document is always
//! reported as [`Error::SystemNotFound`], even if the document also names an
//! unregistered class.

use bikes_domain::error::{Error, Result};
use bikes_domain::ports::BikeShareSystem;
use bikes_domain::value_objects::SystemDefinition;

use crate::ports::registry::ProviderRegistry;

/// Resolves tags against a provider registry
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    registry: &'a ProviderRegistry,
}

impl<'a> Resolver<'a> {
    /// Create a resolver over `registry`
    pub fn new(registry: &'a ProviderRegistry) -> Self {
        Self { registry }
    }

    /// Construct the provider for `tag` in `definition`
    ///
    /// `key` is injected into the metadata only when the provider type is
    /// authed; it is ignored otherwise. Nothing is constructed when the key
    /// is required but absent.
    pub fn resolve(
        &self,
        definition: &SystemDefinition,
        tag: &str,
        key: Option<&str>,
    ) -> Result<Box<dyn BikeShareSystem>> {
        let system = definition.system();
        let provider = self.construct(definition, tag, key).inspect_err(|err| {
            tracing::warn!(system, tag, error = %err, "Failed to resolve bike-share system");
        })?;
        tracing::info!(
            system,
            tag,
            class_name = provider.provider_name(),
            "Bike-share system resolved"
        );
        Ok(provider)
    }

    fn construct(
        &self,
        definition: &SystemDefinition,
        tag: &str,
        key: Option<&str>,
    ) -> Result<Box<dyn BikeShareSystem>> {
        let system = definition.system();
        let found = definition
            .find(tag)
            .ok_or_else(|| Error::system_not_found(tag, system))?;

        let entry = self.registry.lookup(found.class_name)?;

        let metadata = match (entry.authed, key) {
            (true, None) => {
                return Err(Error::missing_credential(system, entry.name));
            }
            (true, Some(key)) => {
                tracing::debug!(system, tag, class_name = entry.name, "Injecting credential");
                found.metadata.clone().with_key(key)
            }
            (false, _) => found.metadata.clone(),
        };

        (entry.factory)(metadata)
            .map_err(|message| Error::provider_construction(entry.name, message))
    }
}
