//! Local persistence for WeatherNow: a small key-value store holding the
//! unit preference, the active alert and the recently viewed places.

pub mod error;
pub mod kv;
pub mod preferences;
pub mod recent;

pub use error::StorageError;
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use preferences::PreferenceStore;
pub use recent::{RecencyList, RecentStore, RECENT_CAPACITY};
