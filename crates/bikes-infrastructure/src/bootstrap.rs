//! Service bootstrap
//!
//! Selects the record store named by configuration and binds it to the
//! process-wide provider registry.

use bikes_application::ports::registry::{ProviderRegistry, list_record_stores, resolve_record_store};
use bikes_application::use_cases::BikeShareService;
use bikes_domain::error::{Error, Result};
use tracing::info;

use crate::config::AppConfig;

/// Build the bike-share service described by `config`
pub fn init_service(config: &AppConfig) -> Result<BikeShareService> {
    let store = resolve_record_store(&config.records.to_store_config()).map_err(Error::configuration)?;
    let registry = ProviderRegistry::global()?;

    info!(
        backend = store.backend_name(),
        providers = registry.len(),
        "Bike-share service initialized"
    );

    Ok(BikeShareService::new(store, registry))
}

/// Names of the record store backends linked into this binary
pub fn available_backends() -> Vec<&'static str> {
    list_record_stores().into_iter().map(|(name, _)| name).collect()
}
