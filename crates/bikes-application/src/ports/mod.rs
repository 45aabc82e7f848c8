//! Application ports
//!
//! Domain port traits are re-exported here so provider crates only need to
//! depend on the application layer for registration.

pub mod registry;

pub use bikes_domain::ports::{BikeShareSystem, RecordStore};
