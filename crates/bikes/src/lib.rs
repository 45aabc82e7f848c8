//! # Bike-share System Registry
//!
//! Resolves a bike-share deployment, named by a system and a tag, to a
//! constructed provider built from bundled system definitions.
//!
//! ## Example
//!
//! ```no_run
//! let tags = bikes::list_tags("cyclocity")?;
//! let velib = bikes::resolve("cyclocity", "velib", Some("my-api-key"))?;
//! assert_eq!(velib.provider_name(), "Cyclocity");
//! # Ok::<(), bikes::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - `domain` - error taxonomy, system definitions, port traits
//! - `application` - provider registry, tag index, resolver
//! - `providers` - provider types and record stores
//! - `infrastructure` - configuration, logging, bootstrap

use std::sync::{Arc, OnceLock};

/// Domain layer - core types and ports
pub mod domain {
    pub use bikes_domain::*;
}

/// Application layer - registry and use cases
pub mod application {
    pub use bikes_application::*;
}

/// Provider implementations
pub mod providers {
    pub use bikes_providers::*;
}

/// Infrastructure layer - config, logging, bootstrap
pub mod infrastructure {
    pub use bikes_infrastructure::*;
}

pub use bikes_application::ports::registry::ProviderRegistry;
pub use bikes_application::use_cases::BikeShareService;
pub use bikes_domain::{BikeShareSystem, Error, InstanceMetadata, Result, SystemMeta};

use bikes_providers::record_store::BundledRecordStore;

static DEFAULT_SERVICE: OnceLock<BikeShareService> = OnceLock::new();

/// Service over the bundled records and every linked provider type
pub fn default_service() -> Result<&'static BikeShareService> {
    if let Some(service) = DEFAULT_SERVICE.get() {
        return Ok(service);
    }
    let service = BikeShareService::with_global_registry(Arc::new(BundledRecordStore::new()))?;
    Ok(DEFAULT_SERVICE.get_or_init(|| service))
}

/// Names of every bundled system definition
pub fn list_system_names() -> Result<Vec<String>> {
    default_service()?.list_system_names()
}

/// Every tag declared by the bundled definition of `system`
pub fn list_tags(system: &str) -> Result<Vec<String>> {
    default_service()?.list_tags(system)
}

/// Construct the provider for `tag` in the bundled definition of `system`
pub fn resolve(system: &str, tag: &str, key: Option<&str>) -> Result<Box<dyn BikeShareSystem>> {
    default_service()?.resolve(system, tag, key)
}
