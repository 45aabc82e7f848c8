//! Bike-share provider types
//!
//! Each type is built from the instance metadata of one deployment and
//! registers itself into `BIKE_SHARE_PROVIDERS` under the class name used in
//! system definition documents.

mod common;

pub mod bcycle;
pub mod bicincitta;
pub mod bixi;
pub mod cyclocity;
pub mod decobike;
pub mod domoblue;
pub mod gewista_citybike;
pub mod smartbike;

pub use bcycle::BCycleSystem;
pub use bicincitta::Bicincitta;
pub use bixi::BixiSystem;
pub use cyclocity::Cyclocity;
pub use decobike::DecoBike;
pub use domoblue::Domoblue;
pub use gewista_citybike::GewistaCitybike;
pub use smartbike::{FeedFormat, SmartBike, SmartClunky};
