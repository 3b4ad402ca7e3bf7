//! Persistence layer for the preference store.

use std::io;
use std::path::Path;

use crate::error::StorageError;
use crate::store::PreferenceStore;

/// How often sled flushes dirty pages in the background. Writes made through
/// [`SledPreferenceStore::set`] are immediately visible through the same
/// handle and become durable within this interval.
const FLUSH_INTERVAL_MS: u64 = 500;

/// Sled-based implementation of [`PreferenceStore`].
///
/// Values are stored as raw UTF-8 strings; the persisted format is itself a
/// string, so there is no binary envelope around it.
pub struct SledPreferenceStore {
    db: sled::Db,
}

impl SledPreferenceStore {
    /// Open (or create) a preference database at the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let db = sled::Config::new()
            .path(path.as_ref())
            .flush_every_ms(Some(FLUSH_INTERVAL_MS))
            .open()
            .map_err(to_storage_io)?;
        Ok(Self { db })
    }

    /// Get the underlying sled database (for advanced operations)
    pub fn db(&self) -> &sled::Db {
        &self.db
    }
}

impl PreferenceStore for SledPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let Some(raw) = self.db.get(key.as_bytes()).map_err(to_storage_io)? else {
            return Ok(None);
        };
        let value = String::from_utf8(raw.to_vec()).map_err(|e| StorageError::InvalidValue {
            key: key.to_string(),
            reason: format!("stored bytes are not valid UTF-8: {}", e),
        })?;
        Ok(Some(value))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.db
            .insert(key.as_bytes(), value.as_bytes())
            .map_err(to_storage_io)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.db.remove(key.as_bytes()).map_err(to_storage_io)?;
        Ok(())
    }

    fn flush(&self) -> Result<(), StorageError> {
        self.db.flush().map_err(to_storage_io)?;
        Ok(())
    }
}

fn to_storage_io(err: sled::Error) -> StorageError {
    StorageError::IoError(io::Error::new(io::ErrorKind::Other, err.to_string()))
}
