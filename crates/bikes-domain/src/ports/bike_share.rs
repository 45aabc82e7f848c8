//! Bike-share provider port

use std::fmt::Debug;

use crate::value_objects::{InstanceMetadata, SystemMeta};

/// A constructed provider for one bike-share deployment
///
/// Instances are produced by the provider registry from instance metadata;
/// the caller owns them outright.
pub trait BikeShareSystem: Send + Sync + Debug {
    /// Registered provider type name (the `class` value in documents)
    fn provider_name(&self) -> &str;

    /// Deployment tag
    fn tag(&self) -> &str;

    /// Descriptive metadata
    fn meta(&self) -> &SystemMeta;

    /// Metadata the provider was constructed from, including an injected key
    fn metadata(&self) -> &InstanceMetadata;

    /// Whether the provider type requires a credential
    fn authed(&self) -> bool {
        false
    }
}
