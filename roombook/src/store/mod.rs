//! Persistence layer for room snapshots.
//!
//! The store writes the full room-and-reservation collection as one
//! key-value snapshot on every mutation and reads it back wholesale at
//! startup. There are no incremental writes; the snapshot under the fixed
//! `"rooms"` key is always the complete state.
//!
//! # Examples
//!
//! ```no_run
//! use roombook::store::{JsonStore, Store, StoreConfig};
//! use roombook::RoomRegistry;
//!
//! let store = JsonStore::open(StoreConfig::new("/tmp/rooms.json")).unwrap();
//!
//! // Seed and persist the default room set
//! let registry = RoomRegistry::with_default_rooms();
//! store.save(&registry).unwrap();
//!
//! // Reload it
//! let loaded = store.load().unwrap();
//! assert_eq!(loaded, Some(registry));
//! ```

mod config;
mod json;
#[cfg(test)]
pub(crate) mod test_util;

pub use config::{default_data_dir, resolve_store_path, StoreConfig};
pub use json::JsonStore;

use crate::error::Result;
use crate::registry::RoomRegistry;

/// A durable snapshot store for the room collection.
///
/// Implementations overwrite the prior snapshot wholesale on `save` and
/// return `None` from `load` when no snapshot exists yet, in which case the
/// caller seeds the default room set.
pub trait Store {
    /// Loads the persisted snapshot, if one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot exists but cannot be read or parsed.
    fn load(&self) -> Result<Option<RoomRegistry>>;

    /// Persists the full room collection, replacing any prior snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be serialized or written.
    fn save(&self, registry: &RoomRegistry) -> Result<()>;
}

impl<S: Store + ?Sized> Store for &S {
    fn load(&self) -> Result<Option<RoomRegistry>> {
        (**self).load()
    }

    fn save(&self, registry: &RoomRegistry) -> Result<()> {
        (**self).save(registry)
    }
}
