//! In-memory store for unit tests.

use std::cell::RefCell;

use super::Store;
use crate::error::Result;
use crate::registry::RoomRegistry;

/// A store that keeps the serialized snapshot in memory.
///
/// Serializes through the same JSON document as the file-backed store so
/// tests exercise the real wire format without touching the filesystem.
#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    snapshot: RefCell<Option<String>>,
}

impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns the last persisted snapshot text, if any save has landed.
    pub(crate) fn raw_snapshot(&self) -> Option<String> {
        self.snapshot.borrow().clone()
    }
}

impl Store for MemoryStore {
    fn load(&self) -> Result<Option<RoomRegistry>> {
        match self.snapshot.borrow().as_deref() {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, registry: &RoomRegistry) -> Result<()> {
        let raw = serde_json::to_string(registry)?;
        *self.snapshot.borrow_mut() = Some(raw);
        Ok(())
    }
}
