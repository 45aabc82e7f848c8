//! Value objects describing system definition documents

pub mod definition;
pub mod instance;
pub mod meta;
pub mod system_name;

pub use definition::{InstanceMatch, RecordShape, SystemDefinition};
pub use instance::InstanceMetadata;
pub use meta::SystemMeta;
pub use system_name::normalize_system_name;
