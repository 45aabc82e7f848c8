//! ClearChannel SmartBike deployments
//!
//! Two generations share one document: `SmartBike` serves a structured feed,
//! `SmartClunky` the older map pages.

use bikes_domain::ports::BikeShareSystem;
use bikes_domain::value_objects::{InstanceMetadata, SystemMeta};
use serde::Deserialize;

use super::common::decode;

/// Payload format of a SmartBike feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedFormat {
    /// JSON station list
    Json,
    /// XML station list
    Xml,
    /// HTML map page with embedded markers
    Html,
}

/// Current-generation SmartBike deployment
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SmartBike {
    tag: String,
    #[serde(default)]
    meta: SystemMeta,
    feed_url: String,
    #[serde(default)]
    format: Option<FeedFormat>,
    #[serde(skip)]
    metadata: InstanceMetadata,
}

impl SmartBike {
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

    /// Feed format, JSON unless the document says otherwise
    pub fn format(&self) -> FeedFormat {
        self.format.unwrap_or(FeedFormat::Json)
    }
}

impl BikeShareSystem for SmartBike {
    fn provider_name(&self) -> &str {
        "SmartBike"
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

/// Older SmartBike deployment scraped from map pages
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SmartClunky {
    tag: String,
    #[serde(default)]
    meta: SystemMeta,
    feed_url: String,
    #[serde(default)]
    format: Option<FeedFormat>,
    #[serde(skip)]
    metadata: InstanceMetadata,
}

impl SmartClunky {
    /// Build from instance metadata
    pub fn from_metadata(metadata: InstanceMetadata) -> Result<Self, String> {
        let mut system: Self = decode(&metadata)?;
        system.metadata = metadata;
        Ok(system)
    }

    /// Map page URL
    pub fn feed_url(&self) -> &str {
        &self.feed_url
    }

    /// Feed format, HTML unless the document says otherwise
    pub fn format(&self) -> FeedFormat {
        self.format.unwrap_or(FeedFormat::Html)
    }
}

impl BikeShareSystem for SmartClunky {
    fn provider_name(&self) -> &str {
        "SmartClunky"
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
static SMARTBIKE_PROVIDER: BikeShareProviderEntry = BikeShareProviderEntry {
    name: "SmartBike",
    description: "ClearChannel SmartBike structured feeds",
    authed: false,
    factory: |metadata| Ok(Box::new(SmartBike::from_metadata(metadata)?)),
};

#[linkme::distributed_slice(BIKE_SHARE_PROVIDERS)]
static SMARTCLUNKY_PROVIDER: BikeShareProviderEntry = BikeShareProviderEntry {
    name: "SmartClunky",
    description: "ClearChannel SmartBike legacy map pages",
    authed: false,
    factory: |metadata| Ok(Box::new(SmartClunky::from_metadata(metadata)?)),
};
