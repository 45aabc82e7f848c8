//! Gewista Citybike (Vienna)

use bikes_domain::ports::BikeShareSystem;
use bikes_domain::value_objects::{InstanceMetadata, SystemMeta};
use serde::Deserialize;

use super::common::decode;

/// Citybike deployment run by Gewista
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GewistaCitybike {
    tag: String,
    #[serde(default)]
    meta: SystemMeta,
    endpoint: String,
    #[serde(skip)]
    metadata: InstanceMetadata,
}

impl GewistaCitybike {
    /// Build from instance metadata
    pub fn from_metadata(metadata: InstanceMetadata) -> Result<Self, String> {
        let mut system: Self = decode(&metadata)?;
        system.metadata = metadata;
        Ok(system)
    }

    /// XML endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl BikeShareSystem for GewistaCitybike {
    fn provider_name(&self) -> &str {
        "GewistaCitybike"
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
static GEWISTA_PROVIDER: BikeShareProviderEntry = BikeShareProviderEntry {
    name: "GewistaCitybike",
    description: "Gewista Citybike XML endpoint",
    authed: false,
    factory: |metadata| Ok(Box::new(GewistaCitybike::from_metadata(metadata)?)),
};
