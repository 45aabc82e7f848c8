//! Bicincittà deployments

use bikes_domain::ports::BikeShareSystem;
use bikes_domain::value_objects::{InstanceMetadata, SystemMeta};
use serde::Deserialize;

use super::common::decode;

/// A Bicincittà city page, optionally spanning several municipalities
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Bicincitta {
    tag: String,
    #[serde(default)]
    meta: SystemMeta,
    url: String,
    #[serde(default)]
    comunes: Vec<String>,
    #[serde(skip)]
    metadata: InstanceMetadata,
}

impl Bicincitta {
    /// Build from instance metadata
    pub fn from_metadata(metadata: InstanceMetadata) -> Result<Self, String> {
        let mut system: Self = decode(&metadata)?;
        system.metadata = metadata;
        Ok(system)
    }

    /// Station page URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Municipalities served; empty when the deployment covers one city
    pub fn comunes(&self) -> &[String] {
        &self.comunes
    }
}

impl BikeShareSystem for Bicincitta {
    fn provider_name(&self) -> &str {
        "Bicincitta"
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
static BICINCITTA_PROVIDER: BikeShareProviderEntry = BikeShareProviderEntry {
    name: "Bicincitta",
    description: "Bicincittà city pages",
    authed: false,
    factory: |metadata| Ok(Box::new(Bicincitta::from_metadata(metadata)?)),
};
