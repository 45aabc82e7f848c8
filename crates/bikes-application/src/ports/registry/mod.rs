//! Provider Registry System
//!
//! Uses the `linkme` crate for link-time registration of provider types and
//! record store backends. Nothing is evaluated by name at runtime: a class
//! name from a document is only ever looked up in a table assembled from the
//! registered entries.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Provider Registration Flow                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(             │
//! │                            BIKE_SHARE_PROVIDERS)]               │
//! │                        static ENTRY: BikeShareProviderEntry     │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static BIKE_SHARE_PROVIDERS = [..]   │
//! │                              ↓                                  │
//! │  3. Built once:        ProviderRegistry::global()               │
//! │                              ↓                                  │
//! │  4. Document selects:  "class": "BixiSystem" → factory          │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering a Provider (in bikes-providers)
//!
//! ```ignore
//! use bikes_application::ports::registry::{BikeShareProviderEntry, BIKE_SHARE_PROVIDERS};
//!
//! #[linkme::distributed_slice(BIKE_SHARE_PROVIDERS)]
//! static BIXI_PROVIDER: BikeShareProviderEntry = BikeShareProviderEntry {
//!     name: "BixiSystem",
//!     description: "PBSC Bixi XML feeds",
//!     authed: false,
//!     factory: |metadata| Ok(Box::new(BixiSystem::from_metadata(metadata)?)),
//! };
//! ```

pub mod bike_share;
pub mod record_store;

pub use bike_share::{
    BIKE_SHARE_PROVIDERS, BikeShareFactory, BikeShareProviderEntry, ProviderRegistry,
    list_bike_share_providers,
};
pub use record_store::{
    RECORD_STORES, RecordStoreConfig, RecordStoreEntry, list_record_stores, resolve_record_store,
};
