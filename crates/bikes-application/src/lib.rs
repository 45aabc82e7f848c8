//! Application Layer - Bike-share System Registry
//!
//! Turns a `(system, tag, key)` request into a constructed provider.
//!
//! ## Ports
//!
//! - `ports::registry::*`: link-time registries for provider types and record stores
//!
//! ## Use Cases
//!
//! - Record loading with name normalisation
//! - Tag enumeration over flat and namespaced documents
//! - Resolution of a tag to a constructed provider, including credential checks
//!
//! ## Dependencies
//!
//! This crate depends only on `bikes-domain` and pure Rust libraries. Concrete
//! providers and stores live in `bikes-providers`.

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
