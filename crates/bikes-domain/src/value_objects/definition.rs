//! System definition documents
//!
//! A system definition comes in one of two shapes:
//!
//! ```text
//! flat:        { "class": "Name", "instances": [ {...}, ... ] }
//! namespaced:  { "class": { "Name": { "instances": [ {...}, ... ] }, ... } }
//! ```
//!
//! Parsing validates the shape once so that tag enumeration and resolution
//! work on typed data. Class-name order in the namespaced shape is the
//! document order.

use serde_json::Value;

use crate::constants::{CLASS_FIELD, INSTANCES_FIELD, TAG_FIELD};
use crate::error::{Error, Result};
use crate::value_objects::InstanceMetadata;

/// The two supported document layouts
#[derive(Debug, Clone, PartialEq)]
pub enum RecordShape {
    /// One provider type constructs every instance
    Flat {
        /// Provider type name
        class_name: String,
        /// Instances in document order
        instances: Vec<InstanceMetadata>,
    },
    /// Several provider types share the document
    Namespaced {
        /// Provider type names with their instances, in document order
        classes: Vec<(String, Vec<InstanceMetadata>)>,
    },
}

/// An instance located by tag, together with the provider type that builds it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstanceMatch<'a> {
    /// Provider type name responsible for the instance
    pub class_name: &'a str,
    /// Matched metadata
    pub metadata: &'a InstanceMetadata,
}

/// A parsed system definition record
#[derive(Debug, Clone, PartialEq)]
pub struct SystemDefinition {
    system: String,
    shape: RecordShape,
}

impl SystemDefinition {
    /// Build a definition directly from a shape
    pub fn new(system: impl Into<String>, shape: RecordShape) -> Self {
        Self {
            system: system.into(),
            shape,
        }
    }

    /// Parse a JSON document, rejecting anything that is neither flat nor namespaced
    pub fn from_value(system: impl Into<String>, value: Value) -> Result<Self> {
        let system = system.into();
        let Value::Object(mut document) = value else {
            return Err(Error::malformed_record(
                system,
                "document is not a JSON object",
            ));
        };

        let shape = match document.remove(CLASS_FIELD) {
            Some(Value::String(class_name)) => {
                let instances = match document.remove(INSTANCES_FIELD) {
                    Some(instances) => parse_instances(&system, &class_name, instances)?,
                    None => {
                        return Err(Error::malformed_record(
                            system,
                            format!("flat record for class {class_name} has no '{INSTANCES_FIELD}'"),
                        ));
                    }
                };
                RecordShape::Flat {
                    class_name,
                    instances,
                }
            }
            Some(Value::Object(classes)) => {
                let mut parsed = Vec::with_capacity(classes.len());
                for (class_name, sub_record) in classes {
                    let instances = match sub_record {
                        Value::Object(mut sub_record) => match sub_record.remove(INSTANCES_FIELD) {
                            Some(instances) => parse_instances(&system, &class_name, instances)?,
                            None => {
                                return Err(Error::malformed_record(
                                    system,
                                    format!("class {class_name} has no '{INSTANCES_FIELD}'"),
                                ));
                            }
                        },
                        other => {
                            return Err(Error::malformed_record(
                                system,
                                format!(
                                    "class {class_name} maps to {} instead of an object",
                                    json_type_name(&other)
                                ),
                            ));
                        }
                    };
                    parsed.push((class_name, instances));
                }
                RecordShape::Namespaced { classes: parsed }
            }
            Some(other) => {
                return Err(Error::malformed_record(
                    system,
                    format!(
                        "'{CLASS_FIELD}' is {} instead of a string or mapping",
                        json_type_name(&other)
                    ),
                ));
            }
            None => {
                return Err(Error::malformed_record(
                    system,
                    format!("missing '{CLASS_FIELD}' field"),
                ));
            }
        };

        Ok(Self { system, shape })
    }

    /// Parse a JSON document from text
    pub fn from_json_str(system: impl Into<String>, json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(system, value)
    }

    /// System name this definition was loaded under
    pub fn system(&self) -> &str {
        &self.system
    }

    /// Document layout
    pub fn shape(&self) -> &RecordShape {
        &self.shape
    }

    /// Whether several provider types share this document
    pub fn is_namespaced(&self) -> bool {
        matches!(self.shape, RecordShape::Namespaced { .. })
    }

    /// Provider type names referenced by the document, in document order
    pub fn class_names(&self) -> Vec<&str> {
        match &self.shape {
            RecordShape::Flat { class_name, .. } => vec![class_name.as_str()],
            RecordShape::Namespaced { classes } => {
                classes.iter().map(|(name, _)| name.as_str()).collect()
            }
        }
    }

    /// Every instance with its provider type, grouped by class in nested document order
    pub fn instances(&self) -> Box<dyn Iterator<Item = InstanceMatch<'_>> + '_> {
        match &self.shape {
            RecordShape::Flat {
                class_name,
                instances,
            } => Box::new(instances.iter().map(move |metadata| InstanceMatch {
                class_name,
                metadata,
            })),
            RecordShape::Namespaced { classes } => {
                Box::new(classes.iter().flat_map(|(class_name, instances)| {
                    instances.iter().map(move |metadata| InstanceMatch {
                        class_name,
                        metadata,
                    })
                }))
            }
        }
    }

    /// Every tag, grouped by class in nested document order
    pub fn tags(&self) -> Vec<&str> {
        self.instances()
            .filter_map(|found| found.metadata.tag())
            .collect()
    }

    /// First instance whose tag equals `tag`
    ///
    /// Duplicate tags are not rejected; the first one in iteration order wins.
    pub fn find(&self, tag: &str) -> Option<InstanceMatch<'_>> {
        self.instances()
            .find(|found| found.metadata.tag() == Some(tag))
    }

    /// Total number of instances
    pub fn len(&self) -> usize {
        match &self.shape {
            RecordShape::Flat { instances, .. } => instances.len(),
            RecordShape::Namespaced { classes } => {
                classes.iter().map(|(_, instances)| instances.len()).sum()
            }
        }
    }

    /// Whether the document declares no instances
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn parse_instances(system: &str, class_name: &str, value: Value) -> Result<Vec<InstanceMetadata>> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(Error::malformed_record(
                system,
                format!(
                    "'{INSTANCES_FIELD}' of class {class_name} is {} instead of a list",
                    json_type_name(&other)
                ),
            ));
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let kind = json_type_name(&item);
            let metadata = InstanceMetadata::from_value(item).ok_or_else(|| {
                Error::malformed_record(
                    system,
                    format!("instance {index} of class {class_name} is {kind} instead of an object"),
                )
            })?;
            if metadata.tag().is_none() {
                return Err(Error::malformed_record(
                    system,
                    format!("instance {index} of class {class_name} has no string '{TAG_FIELD}'"),
                ));
            }
            Ok(metadata)
        })
        .collect()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
