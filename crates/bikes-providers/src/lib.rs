//! # Bike-share Registry - Provider Implementations
//!
//! Concrete provider types and record store backends. Every type in this
//! crate registers itself into the registry slices declared by
//! `bikes-application`; linking this crate is enough to make them resolvable.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Bike-share | `BikeShareSystem` | Bixi, BCycle, SmartBike, SmartClunky, Cyclocity, Bicincitta, Domoblue, GewistaCitybike, DecoBike |
//! | Record store | `RecordStore` | Bundled, Filesystem, InMemory |
//!
//! ## Usage
//!
//! ```ignore
//! use bikes_providers::record_store::BundledRecordStore;
//! use bikes_providers::bike_share::BixiSystem;
//! ```

// Re-export domain types commonly used with providers
pub use bikes_domain::error::{Error, Result};
pub use bikes_domain::ports::{BikeShareSystem, RecordStore};

/// Provider-specific constants
pub mod constants;

/// Bike-share provider types
///
/// Implements `BikeShareSystem` for each supported operator technology.
pub mod bike_share;

/// Record store backends
///
/// Implements `RecordStore` over bundled data, a directory, or memory.
pub mod record_store;
