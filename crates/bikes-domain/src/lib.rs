//! # Bike-share Registry Domain
//!
//! Core types for resolving a bike-share deployment from declarative
//! system definitions. Nothing in this crate performs I/O: stores and
//! provider types live behind the traits in [`ports`].
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error taxonomy shared by every layer |
//! | [`value_objects`] | System definitions, instance metadata, system meta |
//! | [`ports`] | `RecordStore` and `BikeShareSystem` contracts |
//! | [`constants`] | Document field names |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{BikeShareSystem, RecordStore};
pub use value_objects::{
    InstanceMatch, InstanceMetadata, RecordShape, SystemDefinition, SystemMeta,
    normalize_system_name,
};
