//! Credential storage (localStorage in the browser, a map in tests).

use gloo::utils::window;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage rejected the operation on '{key}': {reason}")]
    Rejected { key: String, reason: String },
}

/// Key/value store holding the bearer credentials.
///
/// Policy code never touches `localStorage` directly; it goes through this
/// trait so sessions can be swapped for fixtures.
pub trait CredentialStore {
    /// Returns the raw entry, `None` when the key is absent.
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage` backed store.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        // `None` when the user disabled site data.
        window()
            .local_storage()
            .ok()
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

impl CredentialStore for BrowserStore {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Rejected {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Rejected {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }
}

#[cfg(test)]
pub use memory::MemoryStore;

#[cfg(test)]
mod memory {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    use super::{CredentialStore, StorageError};

    /// In-memory store for tests. `stuck` makes `remove` a silent no-op,
    /// which is how a failing backend looks from the outside.
    #[derive(Debug, Default)]
    pub struct MemoryStore {
        entries: RefCell<HashMap<String, String>>,
        stuck: Cell<bool>,
    }

    impl MemoryStore {
        pub fn with(entries: &[(&str, &str)]) -> Self {
            let store = Self::default();
            for (k, v) in entries {
                store.entries.borrow_mut().insert(k.to_string(), v.to_string());
            }
            store
        }

        pub fn stuck(self) -> Self {
            self.stuck.set(true);
            self
        }
    }

    impl CredentialStore for MemoryStore {
        fn read(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.entries.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            if !self.stuck.get() {
                self.entries.borrow_mut().remove(key);
            }
            Ok(())
        }
    }
}
