//! Preference Store
//!
//! Key-value string storage seam between the selection session and its
//! persistence backend. The session is written against the [`PreferenceStore`]
//! trait so tests (and degraded-mode operation) can run on an in-memory fake
//! instead of a real backend.

pub mod persistence;

pub use persistence::SledPreferenceStore;

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::StorageError;

/// Origin-scoped key-value string store.
///
/// Absent keys read back as `None`; `set` overwrites unconditionally.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the entry entirely, so the next read sees an absent key.
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Block until pending writes are durable.
    fn flush(&self) -> Result<(), StorageError>;
}

/// In-memory implementation of [`PreferenceStore`].
///
/// Used as the test fake and as the fallback backend when durable storage is
/// unavailable. Clones share the same underlying map, so one handle can act
/// as "the browser storage" across several simulated sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every entry, simulating an external storage clear.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.write().remove(key);
        Ok(())
    }

    fn flush(&self) -> Result<(), StorageError> {
        Ok(())
    }
}
