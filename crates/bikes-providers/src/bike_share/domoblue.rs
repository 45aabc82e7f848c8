//! Domoblue deployments

use bikes_domain::ports::BikeShareSystem;
use bikes_domain::value_objects::{InstanceMetadata, SystemMeta};
use serde::Deserialize;

use super::common::decode;
use crate::constants::DOMOBLUE_FEED_URL;

/// A Domoblue system, identified by its numeric client id
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Domoblue {
    tag: String,
    #[serde(default)]
    meta: SystemMeta,
    system_id: u32,
    #[serde(skip)]
    metadata: InstanceMetadata,
}

impl Domoblue {
    /// Build from instance metadata
    pub fn from_metadata(metadata: InstanceMetadata) -> Result<Self, String> {
        let mut system: Self = decode(&metadata)?;
        system.metadata = metadata;
        Ok(system)
    }

    /// Client id
    pub fn system_id(&self) -> u32 {
        self.system_id
    }

    /// Map feed URL for the client id
    pub fn feed_url(&self) -> String {
        format!("{}?cliente={}", DOMOBLUE_FEED_URL, self.system_id)
    }
}

impl BikeShareSystem for Domoblue {
    fn provider_name(&self) -> &str {
        "Domoblue"
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

use bikes_application::ports::registry::{BIKE_SHARE_PROVIDERS, BikeShareProviderEntry};

#[linkme::distributed_slice(BIKE_SHARE_PROVIDERS)]
static DOMOBLUE_PROVIDER: BikeShareProviderEntry = BikeShareProviderEntry {
    name: "Domoblue",
    description: "Domoblue map feeds",
    authed: false,
    factory: |metadata| Ok(Box::new(Domoblue::from_metadata(metadata)?)),
};
