//! Client-side persisted session state.
//!
//! The only state kept is the authentication flag. It lives in a key/value
//! store injected through [`SessionContext`] so components never reach for
//! ambient global storage and tests can hand in a [`MemoryStore`].

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::session::SessionError;

use std::sync::Arc;

use log::{debug, info};

/// Storage key of the authentication flag.
pub const AUTH_FLAG_KEY: &str = "isAuthenticated";

/// Value written under [`AUTH_FLAG_KEY`] on login.
pub const AUTH_FLAG_SET: &str = "true";

/// Flat string key/value storage.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), SessionError>;
}

/// Session operations over an injected store.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn KeyValueStore>,
}

impl SessionContext {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Session over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::default()))
    }

    pub fn is_authenticated(&self) -> Result<bool, SessionError> {
        let value = self.store.get(AUTH_FLAG_KEY)?;
        Ok(value.as_deref() == Some(AUTH_FLAG_SET))
    }

    pub fn mark_authenticated(&self) -> Result<(), SessionError> {
        self.store.set(AUTH_FLAG_KEY, AUTH_FLAG_SET)?;
        info!("Session marked authenticated");
        Ok(())
    }

    /// Unconditional remove; the previous value is never read.
    pub fn clear_authenticated(&self) -> Result<(), SessionError> {
        self.store.remove(AUTH_FLAG_KEY)?;
        debug!("Authentication flag cleared");
        Ok(())
    }
}
