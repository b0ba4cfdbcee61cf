//! Credential token persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login form writes the session token here and the landing page reads
//! it back. Storage is injected through `KeyValueStorage` so the same store
//! runs over browser `localStorage` in hydrate builds and over an in-memory
//! map in tests and on the server.
//!
//! The token is kept JSON-encoded under a single fixed key. Writes overwrite
//! unconditionally; there is no expiry or versioning.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Storage key holding the JSON-encoded token.
pub const TOKEN_KEY: &str = "token";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage write rejected: {0}")]
    Rejected(String),
    #[error("token encoding failed: {0}")]
    Encode(String),
}

/// Minimal string key-value storage.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error if the value could not be stored.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().ok()?;
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|e| StorageError::Rejected(e.to_string()))?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Browser `localStorage`; unavailable outside hydrate builds.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|e| StorageError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}

/// Read/write accessor for the credential token.
#[derive(Clone)]
pub struct CredentialStore {
    storage: Arc<dyn KeyValueStorage + Send + Sync>,
}

impl CredentialStore {
    pub fn new(storage: Arc<dyn KeyValueStorage + Send + Sync>) -> Self {
        Self { storage }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::default()))
    }

    #[must_use]
    pub fn browser() -> Self {
        Self::new(Arc::new(BrowserStorage))
    }

    /// Current token, or `None` when absent, empty, or not valid JSON.
    #[must_use]
    pub fn read(&self) -> Option<String> {
        let raw = self.storage.get(TOKEN_KEY)?;
        match serde_json::from_str::<Option<String>>(&raw) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                log::warn!("stored token is not valid JSON: {e}");
                None
            }
        }
    }

    /// Overwrite the stored token. `None` is stored as JSON `null`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage rejects the write.
    pub fn write(&self, token: Option<&str>) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&token).map_err(|e| StorageError::Encode(e.to_string()))?;
        self.storage.set(TOKEN_KEY, &raw)
    }
}
