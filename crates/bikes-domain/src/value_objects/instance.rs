//! Instance metadata value object

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::{KEY_FIELD, TAG_FIELD};

/// Metadata describing one concrete bike-share deployment
///
/// The field set is provider-defined; the registry only reads `tag` and
/// passes everything through to the provider constructor. Field order is
/// the document order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceMetadata(Map<String, Value>);

impl InstanceMetadata {
    /// Wrap an existing field map
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Build metadata from a JSON value, returning `None` unless it is an object
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    /// The deployment tag, when present and a string
    pub fn tag(&self) -> Option<&str> {
        self.get_str(TAG_FIELD)
    }

    /// Injected credential, if any
    pub fn key(&self) -> Option<&str> {
        self.get_str(KEY_FIELD)
    }

    /// Raw field access
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// String field access
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    /// Whether a field is present
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Set a field, returning the updated metadata
    pub fn with_field(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    /// Inject a credential under the `key` field
    pub fn with_key(self, key: impl Into<String>) -> Self {
        self.with_field(KEY_FIELD, key.into())
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no fields at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the underlying field map
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume into a JSON object value, suitable for typed deserialization
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for InstanceMetadata {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
