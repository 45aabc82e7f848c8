//! Bike-share Provider Registry
//!
//! Auto-registration system for bike-share provider types using linkme
//! distributed slices. Provider modules register themselves via
//! `#[linkme::distributed_slice(BIKE_SHARE_PROVIDERS)]`; the registry turns
//! the slice into an immutable lookup table once per process.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use bikes_domain::error::{Error, Result};
use bikes_domain::ports::BikeShareSystem;
use bikes_domain::value_objects::InstanceMetadata;

/// Factory building a provider from the metadata of one instance
///
/// Mirrors a keyword constructor: every metadata field is an argument, and a
/// field the provider does not accept is an error.
pub type BikeShareFactory = fn(InstanceMetadata) -> std::result::Result<Box<dyn BikeShareSystem>, String>;

/// Registry entry for bike-share provider types
///
/// Each provider type registers itself with this entry using
/// `#[linkme::distributed_slice(BIKE_SHARE_PROVIDERS)]`. The entry contains
/// metadata, the credential requirement and a factory function.
pub struct BikeShareProviderEntry {
    /// Class name as written in system definition documents
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Whether construction requires a credential key
    pub authed: bool,
    /// Factory function to create provider instances
    pub factory: BikeShareFactory,
}

impl std::fmt::Debug for BikeShareProviderEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BikeShareProviderEntry")
            .field("name", &self.name)
            .field("authed", &self.authed)
            .finish_non_exhaustive()
    }
}

// Auto-collection via linkme distributed slices - providers submit entries at link time
#[linkme::distributed_slice]
pub static BIKE_SHARE_PROVIDERS: [BikeShareProviderEntry] = [..];

// Holds the registry, or the first class name registered twice
static GLOBAL_REGISTRY: OnceLock<std::result::Result<Arc<ProviderRegistry>, &'static str>> =
    OnceLock::new();

/// Immutable lookup table from class name to provider entry
///
/// Built once and shared read-only; concurrent lookups need no locking.
#[derive(Debug, Default, Clone)]
pub struct ProviderRegistry {
    entries: HashMap<&'static str, &'static BikeShareProviderEntry>,
}

impl ProviderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, failing if the name is already taken
    pub fn register(mut self, entry: &'static BikeShareProviderEntry) -> Result<Self> {
        self.insert(entry).map_err(duplicate_provider_type)?;
        Ok(self)
    }

    fn insert(
        &mut self,
        entry: &'static BikeShareProviderEntry,
    ) -> std::result::Result<(), &'static str> {
        match self.entries.insert(entry.name, entry) {
            Some(_) => Err(entry.name),
            None => Ok(()),
        }
    }

    /// Build a registry from an explicit set of entries
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'static BikeShareProviderEntry>,
    {
        entries
            .into_iter()
            .try_fold(Self::new(), |registry, entry| registry.register(entry))
    }

    /// Build a registry from every entry submitted to [`BIKE_SHARE_PROVIDERS`]
    pub fn from_registered() -> Result<Self> {
        Self::from_entries(BIKE_SHARE_PROVIDERS.iter())
    }

    /// Process-wide registry over [`BIKE_SHARE_PROVIDERS`], built on first use
    pub fn global() -> Result<Arc<Self>> {
        let built = GLOBAL_REGISTRY.get_or_init(|| {
            let mut registry = Self::new();
            for entry in BIKE_SHARE_PROVIDERS {
                registry.insert(entry).inspect_err(|class_name| {
                    tracing::warn!(class_name, "Provider type registered more than once");
                })?;
            }
            tracing::debug!(providers = registry.len(), "Provider registry built");
            Ok(Arc::new(registry))
        });

        built.clone().map_err(duplicate_provider_type)
    }

    /// Find the entry registered under `class_name`
    pub fn lookup(&self, class_name: &str) -> Result<&'static BikeShareProviderEntry> {
        self.entries
            .get(class_name)
            .copied()
            .ok_or_else(|| Error::unknown_provider_type(class_name, self.names()))
    }

    /// Run the factory of `class_name` over `metadata`
    ///
    /// Performs no credential check; callers decide whether a key is needed.
    pub fn construct(
        &self,
        class_name: &str,
        metadata: InstanceMetadata,
    ) -> Result<Box<dyn BikeShareSystem>> {
        let entry = self.lookup(class_name)?;
        (entry.factory)(metadata)
            .map_err(|message| Error::provider_construction(entry.name, message))
    }

    /// Whether `class_name` is registered
    pub fn contains(&self, class_name: &str) -> bool {
        self.entries.contains_key(class_name)
    }

    /// Registered class names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.keys().map(|name| (*name).to_string()).collect();
        names.sort();
        names
    }

    /// Registered entries sorted by name
    pub fn entries(&self) -> Vec<&'static BikeShareProviderEntry> {
        let mut entries: Vec<_> = self.entries.values().copied().collect();
        entries.sort_by_key(|entry| entry.name);
        entries
    }

    /// Number of registered provider types
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn duplicate_provider_type(class_name: &str) -> Error {
    Error::DuplicateProviderType {
        class_name: class_name.to_string(),
    }
}

/// List all registered bike-share provider types
///
/// Returns `(name, description, authed)` tuples sorted by name.
pub fn list_bike_share_providers() -> Vec<(&'static str, &'static str, bool)> {
    let mut providers: Vec<_> = BIKE_SHARE_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description, e.authed))
        .collect();
    providers.sort_by_key(|(name, _, _)| *name);
    providers
}
