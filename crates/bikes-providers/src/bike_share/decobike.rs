//! DecoBike deployments

use bikes_domain::ports::BikeShareSystem;
use bikes_domain::value_objects::{InstanceMetadata, SystemMeta};
use serde::Deserialize;

use super::common::decode;

/// DecoBike deployment publishing a `playmoves.xml` feed
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecoBike {
    tag: String,
    #[serde(default)]
    meta: SystemMeta,
    feed_url: String,
    #[serde(skip)]
    metadata: InstanceMetadata,
}

impl DecoBike {
    /// Build from instance metadata
    pub fn from_metadata(metadata: InstanceMetadata) -> Result<Self, String> {
        let mut system: Self = decode(&metadata)?;
        system.metadata = metadata;
        Ok(system)
    }

    /// Station feed URL
    pub fn feed_url(&self) -> &str {
        &self.feed_url
    }
}

impl BikeShareSystem for DecoBike {
    fn provider_name(&self) -> &str {
        "DecoBike"
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
static DECOBIKE_PROVIDER: BikeShareProviderEntry = BikeShareProviderEntry {
    name: "DecoBike",
    description: "DecoBike playmoves feeds",
    authed: false,
    factory: |metadata| Ok(Box::new(DecoBike::from_metadata(metadata)?)),
};
