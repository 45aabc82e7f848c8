//! PBSC Bixi deployments

use bikes_domain::ports::BikeShareSystem;
use bikes_domain::value_objects::{InstanceMetadata, SystemMeta};
use serde::Deserialize;

use super::common::decode;
use crate::constants::BIXI_STATIONS_PATH;

/// Deployment publishing the Bixi XML station feed
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BixiSystem {
    tag: String,
    #[serde(default)]
    meta: SystemMeta,
    root_url: String,
    #[serde(skip)]
    metadata: InstanceMetadata,
}

impl BixiSystem {
    /// Build from instance metadata
    pub fn from_metadata(metadata: InstanceMetadata) -> Result<Self, String> {
        let mut system: Self = decode(&metadata)?;
        system.metadata = metadata;
        Ok(system)
    }

    /// Root URL of the deployment's data directory
    pub fn root_url(&self) -> &str {
        &self.root_url
    }

    /// URL of the station feed
    pub fn feed_url(&self) -> String {
        if self.root_url.ends_with('/') {
            format!("{}{}", self.root_url, BIXI_STATIONS_PATH)
        } else {
            format!("{}/{}", self.root_url, BIXI_STATIONS_PATH)
        }
    }
}

impl BikeShareSystem for BixiSystem {
    fn provider_name(&self) -> &str {
        "BixiSystem"
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
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use bikes_application::ports::registry::{BIKE_SHARE_PROVIDERS, BikeShareProviderEntry};

#[linkme::distributed_slice(BIKE_SHARE_PROVIDERS)]
static BIXI_PROVIDER: BikeShareProviderEntry = BikeShareProviderEntry {
    name: "BixiSystem",
    description: "PBSC Bixi deployments (XML station feed)",
    authed: false,
    factory: |metadata| Ok(Box::new(BixiSystem::from_metadata(metadata)?)),
};
