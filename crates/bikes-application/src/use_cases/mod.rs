//! Use cases
//!
//! - [`record_loader`]: normalise a system name and parse its document
//! - [`tag_index`]: enumerate tags across both document shapes
//! - [`resolver`]: turn a tag into a constructed provider
//! - [`bike_share_service`]: the three entry points over one store and registry

pub mod bike_share_service;
pub mod record_loader;
pub mod resolver;
pub mod tag_index;

pub use bike_share_service::BikeShareService;
pub use record_loader::{list_system_names, load_definition};
pub use resolver::Resolver;
pub use tag_index::list_tags;
