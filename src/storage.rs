//! Key-Value Storage
//!
//! The persistence substrate behind the checklist session. In the browser
//! this is `window.localStorage`; tests use the in-memory implementation.

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

use thiserror::Error;

/// Storage failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Local storage unavailable")]
    Unavailable,
    #[error("Failed to read '{key}': {message}")]
    Read { key: String, message: String },
    #[error("Failed to write '{key}': {message}")]
    Write { key: String, message: String },
    #[error("Failed to serialize checklists: {0}")]
    Serialize(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// String key-value store with synchronous access
pub trait KeyValueStorage {
    /// Read a value, `None` when the key is absent
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// Browser `localStorage`
///
/// Resolves the storage object on every call, so the handle is `Copy` and
/// can be captured freely by event handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage(&self) -> StorageResult<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage()?.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            message: format!("{:?}", e),
        })
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.storage()?.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: format!("{:?}", e),
        })
    }
}

/// In-memory storage with a write counter
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
    writes: RefCell<usize>,
    fail_writes: bool,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one key
    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.values.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }

    /// Storage whose every `set` fails, like a full browser quota
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Number of successful `set` calls
    pub fn writes(&self) -> usize {
        *self.writes.borrow()
    }
}

#[cfg(test)]
impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if self.fail_writes {
            return Err(StorageError::Write {
                key: key.to_string(),
                message: "QuotaExceededError".to_string(),
            });
        }
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}
