//! Descriptive metadata of a deployment

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Human-facing description of a deployment (city, operator, position)
///
/// Every field is optional; fields this type does not know are kept in
/// `extra` so nothing from the document is lost.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemMeta {
    /// Display name of the deployment
    pub name: Option<String>,
    /// City served
    pub city: Option<String>,
    /// ISO country code
    pub country: Option<String>,
    /// Latitude of the city centre
    pub latitude: Option<f64>,
    /// Longitude of the city centre
    pub longitude: Option<f64>,
    /// Operating companies
    #[serde(deserialize_with = "one_or_many")]
    pub company: Vec<String>,
    /// Remaining fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Accept either `"Company"` or `["Company", "Other"]`
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(company)) => vec![company],
        Some(OneOrMany::Many(companies)) => companies,
    })
}
