//! File-backed JSON snapshot store.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::config::StoreConfig;
use super::Store;
use crate::error::Result;
use crate::registry::RoomRegistry;
use crate::room::Room;

/// The on-disk snapshot document: one fixed `"rooms"` slot holding the full
/// room array with nested reservations.
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    rooms: Vec<Room>,
}

/// A snapshot store backed by a single JSON file.
///
/// Every save rewrites the whole snapshot; writes go through a temporary
/// file and a rename so a crash mid-write cannot truncate the previous
/// snapshot.
///
/// # Examples
///
/// ```no_run
/// use roombook::store::{JsonStore, Store, StoreConfig};
///
/// let store = JsonStore::open(StoreConfig::new("/tmp/rooms.json")).unwrap();
/// assert!(store.load().unwrap().is_none());
/// ```
#[derive(Debug)]
pub struct JsonStore {
    config: StoreConfig,
}

impl JsonStore {
    /// Opens a store at the configured path.
    ///
    /// The snapshot file is not created until the first save.
    ///
    /// # Errors
    ///
    /// Returns an error if parent directories need to be created but cannot
    /// be.
    pub fn open(config: StoreConfig) -> Result<Self> {
        if config.create_missing() {
            if let Some(parent) = config.path().parent() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(Self { config })
    }

    /// Returns the snapshot file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.config.path()
    }
}

impl Store for JsonStore {
    fn load(&self) -> Result<Option<RoomRegistry>> {
        let path = self.config.path();
        if !path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(path)?;
        let snapshot: Snapshot = serde_json::from_str(&raw)?;
        Ok(Some(RoomRegistry::from_rooms(snapshot.rooms)))
    }

    fn save(&self, registry: &RoomRegistry) -> Result<()> {
        let snapshot = Snapshot {
            rooms: registry.rooms().to_vec(),
        };
        let raw = serde_json::to_string_pretty(&snapshot)?;

        let path = self.config.path();
        if let Some(parent) = path.parent() {
            if self.config.create_missing() {
                fs::create_dir_all(parent)?;
            } else if !parent.exists() {
                return Err(crate::error::Error::DataDirectoryNotFound {
                    path: parent.to_path_buf(),
                });
            }
        }

        // Write-then-rename keeps the previous snapshot intact if the
        // process dies mid-write.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reservation::Reservation;
    use crate::room::RoomNumber;
    use crate::slot::TimeSlot;
    use tempfile::tempdir;

    fn store_in(dir: &Path) -> JsonStore {
        JsonStore::open(StoreConfig::new(dir.join("rooms.json"))).unwrap()
    }

    fn populated_registry() -> RoomRegistry {
        let mut registry = RoomRegistry::with_default_rooms();
        let number = RoomNumber::try_from(101).unwrap();
        let id = registry.allocate_id();
        let reservation = Reservation::new(
            id,
            "Alice",
            number,
            TimeSlot::parse("2024-06-01", "10:00", "2").unwrap(),
        )
        .unwrap();
        registry.find_mut(number).unwrap().add_reservation(reservation);
        registry
    }

    #[test]
    fn test_load_absent_snapshot() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());

        let registry = populated_registry();
        store.save(&registry).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, registry);
    }

    #[test]
    fn test_save_overwrites_wholesale() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());

        store.save(&populated_registry()).unwrap();
        let empty = RoomRegistry::with_default_rooms();
        store.save(&empty).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, empty);
        assert_eq!(loaded.reservations().count(), 0);
    }

    #[test]
    fn test_snapshot_document_shape() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());
        store.save(&populated_registry()).unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

        // Fixed top-level slot, array of rooms, camelCase reservations
        let rooms = json["rooms"].as_array().unwrap();
        assert_eq!(rooms.len(), 6);
        assert_eq!(rooms[0]["reservations"][0]["roomNumber"], 101);
        assert_eq!(rooms[0]["reservations"][0]["startTime"], "10:00");
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());
        store.save(&populated_registry()).unwrap();

        assert!(!store.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn test_corrupt_snapshot_is_an_error() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());
        std::fs::write(store.path(), "{not json").unwrap();

        assert!(store.load().is_err());
    }

    #[test]
    fn test_save_without_auto_create_reports_missing_dir() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("absent");
        let config = StoreConfig::new(nested.join("rooms.json")).with_create_missing(false);
        let store = JsonStore::open(config).unwrap();

        let err = store.save(&RoomRegistry::with_default_rooms()).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::DataDirectoryNotFound { .. }
        ));
    }

    #[test]
    fn test_creates_missing_data_dir() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a/b");
        let store = JsonStore::open(StoreConfig::new(nested.join("rooms.json"))).unwrap();
        store.save(&RoomRegistry::with_default_rooms()).unwrap();
        assert!(store.path().exists());
    }
}
