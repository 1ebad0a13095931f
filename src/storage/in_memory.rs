use std::sync::{Arc, RwLock};

use super::error::StorageError;
use super::storage::CartStorage;

/// Keeps the cart document in process memory.
///
/// Clones share the same slot, so a second store built from a clone
/// sees whatever the first one persisted.
#[derive(Clone)]
pub struct InMemoryStorage {
    slot: Arc<RwLock<Option<String>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            slot: Arc::new(RwLock::new(None)),
        }
    }

    /// Starts with a document already in place, as if a previous
    /// session had written it.
    pub fn seeded(document: impl Into<String>) -> Self {
        InMemoryStorage {
            slot: Arc::new(RwLock::new(Some(document.into()))),
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl CartStorage for InMemoryStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        let slot = self
            .slot
            .read()
            .map_err(|_| StorageError::LockPoisoned("read"))?;
        Ok(slot.clone())
    }

    fn write(&self, document: &str) -> Result<(), StorageError> {
        let mut slot = self
            .slot
            .write()
            .map_err(|_| StorageError::LockPoisoned("write"))?;
        *slot = Some(document.to_string());
        Ok(())
    }
}
