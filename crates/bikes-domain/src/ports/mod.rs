//! Domain Port Interfaces
//!
//! Contracts implemented outside the domain:
//!
//! - [`RecordStore`] - where system definition documents come from
//! - [`BikeShareSystem`] - what a constructed provider looks like to callers

pub mod bike_share;
pub mod record_store;

pub use bike_share::BikeShareSystem;
pub use record_store::RecordStore;
