//! Persisted session record and the key-value backends behind it.
//!
//! SYSTEM CONTEXT
//! ==============
//! The signed-in user is cached as JSON under a single `localStorage` key.
//! Reads fail soft: a missing or corrupt record means "signed out".

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::net::types::User;

/// Storage key holding the serialized [`User`].
pub const SESSION_KEY: &str = "user";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("browser storage is not available")]
    Unavailable,
    #[error("storage write failed: {0}")]
    Write(String),
    #[error("could not serialize session: {0}")]
    Serialize(String),
}

/// Synchronous string key-value storage.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

/// In-process store used by tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

/// `window.localStorage`. Looked up on every call, so the handle itself
/// carries no browser state.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// Reads and writes the session record through a [`KeyValueStore`].
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    #[must_use]
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Store backed by `localStorage`.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(Arc::new(BrowserStore))
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::default()))
    }

    /// Persist `user`, replacing any previous record.
    ///
    /// # Errors
    ///
    /// Returns an error if the user cannot be serialized or the backend
    /// rejects the write.
    pub fn save(&self, user: &User) -> Result<(), StorageError> {
        let raw = serde_json::to_string(user).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.backend.set(SESSION_KEY, &raw)
    }

    /// The stored user, or `None` when absent or unreadable.
    #[must_use]
    pub fn load(&self) -> Option<User> {
        let raw = self.backend.get(SESSION_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                leptos::logging::warn!("ignoring unreadable session record: {e}");
                None
            }
        }
    }

    pub fn clear(&self) {
        self.backend.remove(SESSION_KEY);
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").field("key", &SESSION_KEY).finish_non_exhaustive()
    }
}
