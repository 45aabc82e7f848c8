//! Record store backends
//!
//! | Backend | Listing order |
//! |---------|---------------|
//! | [`BundledRecordStore`] | bundle order |
//! | [`FilesystemRecordStore`] | file name order |
//! | [`InMemoryRecordStore`] | insertion order |

pub mod bundled;
pub mod filesystem;
pub mod in_memory;

pub use bundled::BundledRecordStore;
pub use filesystem::FilesystemRecordStore;
pub use in_memory::InMemoryRecordStore;
