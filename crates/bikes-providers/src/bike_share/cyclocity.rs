//! JCDecaux Cyclocity deployments

use bikes_domain::ports::BikeShareSystem;
use bikes_domain::value_objects::{InstanceMetadata, SystemMeta};
use serde::Deserialize;

use super::common::decode;
use crate::constants::CYCLOCITY_API_URL;

/// A JCDecaux contract, reached through the keyed open data API
///
/// The key is required at construction and never shows up in `Debug` output.
#[derive(Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Cyclocity {
    tag: String,
    #[serde(default)]
    meta: SystemMeta,
    contract: String,
    key: String,
    #[serde(skip)]
    metadata: InstanceMetadata,
}

impl Cyclocity {
    /// Build from instance metadata, which must carry the `key` field
    pub fn from_metadata(metadata: InstanceMetadata) -> Result<Self, String> {
        let mut system: Self = decode(&metadata)?;
        system.metadata = metadata;
        Ok(system)
    }

    /// Contract name
    pub fn contract(&self) -> &str {
        &self.contract
    }

    /// Station list URL for the contract, including the key
    pub fn stations_url(&self) -> String {
        format!(
            "{}?contract={}&apiKey={}",
            CYCLOCITY_API_URL, self.contract, self.key
        )
    }
}

impl std::fmt::Debug for Cyclocity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cyclocity")
            .field("tag", &self.tag)
            .field("contract", &self.contract)
            .field("key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl BikeShareSystem for Cyclocity {
    fn provider_name(&self) -> &str {
        "Cyclocity"
    }

    fn tag(&self) -> &str {
        &self.tag
    }

    fn meta(&self) -> &SystemMeta {
        &self.meta
    }

    fn metadata(&self) -> &InstanceMetadata {
        &self.metadata
    }

    fn authed(&self) -> bool {
        true
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use bikes_application::ports::registry::{BIKE_SHARE_PROVIDERS, BikeShareProviderEntry};

#[linkme::distributed_slice(BIKE_SHARE_PROVIDERS)]
static CYCLOCITY_PROVIDER: BikeShareProviderEntry = BikeShareProviderEntry {
    name: "Cyclocity",
    description: "JCDecaux Cyclocity contracts (API key required)",
    authed: true,
    factory: |metadata| Ok(Box::new(Cyclocity::from_metadata(metadata)?)),
};
