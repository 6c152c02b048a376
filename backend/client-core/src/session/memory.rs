use super::KeyValueStore;
use crate::error::session::SessionError;

use common::ErrorLocation;

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Process-local store. Contents are lost on drop.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, String>>, SessionError> {
        self.entries.read().map_err(|e| SessionError::LockError {
            location: ErrorLocation::caller(),
            reason: e.to_string(),
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, String>>, SessionError> {
        self.entries.write().map_err(|e| SessionError::LockError {
            location: ErrorLocation::caller(),
            reason: e.to_string(),
        })
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.read()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.write()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.write()?.remove(key);
        Ok(())
    }
}
