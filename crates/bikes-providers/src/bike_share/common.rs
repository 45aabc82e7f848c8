//! Helpers shared by provider constructors

use bikes_domain::value_objects::InstanceMetadata;
use serde::de::DeserializeOwned;

/// Decode instance metadata into a provider's constructor fields
///
/// Provider types deny unknown fields, so metadata carrying a field the
/// provider does not accept fails here.
pub(crate) fn decode<P: DeserializeOwned>(metadata: &InstanceMetadata) -> Result<P, String> {
    serde_json::from_value(metadata.clone().into_value()).map_err(|err| err.to_string())
}
