//! B-cycle programs

use bikes_domain::ports::BikeShareSystem;
use bikes_domain::value_objects::{InstanceMetadata, SystemMeta};
use serde::Deserialize;

use super::common::decode;
use crate::constants::BCYCLE_BASE_URL;

/// A B-cycle program, identified by its program slug
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BCycleSystem {
    tag: String,
    #[serde(default)]
    meta: SystemMeta,
    program: String,
    #[serde(skip)]
    metadata: InstanceMetadata,
}

impl BCycleSystem {
    /// Build from instance metadata
    pub fn from_metadata(metadata: InstanceMetadata) -> Result<Self, String> {
        let mut system: Self = decode(&metadata)?;
        system.metadata = metadata;
        Ok(system)
    }

    /// Program slug
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Kiosk listing URL of the program
    pub fn feed_url(&self) -> String {
        format!("{}/{}", BCYCLE_BASE_URL, self.program)
    }
}

impl BikeShareSystem for BCycleSystem {
    fn provider_name(&self) -> &str {
        "BCycleSystem"
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
static BCYCLE_PROVIDER: BikeShareProviderEntry = BikeShareProviderEntry {
    name: "BCycleSystem",
    description: "B-cycle programs",
    authed: false,
    factory: |metadata| Ok(Box::new(BCycleSystem::from_metadata(metadata)?)),
};
