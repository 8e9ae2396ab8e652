//! Local key-value string storage.
//!
//! The notification store persists into a single named slot of a
//! string-to-string store, the way a browser page uses `localStorage`.
//! `SqliteStorage` keeps slots in the `local_storage` table so they
//! survive restarts; `MemoryStorage` keeps them for the process lifetime.

use std::collections::HashMap;
use std::path::Path;

use rusqlite::Connection;
use thiserror::Error;

use crate::db::{self, DatabaseError};

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage backend error: {0}")]
    Database(#[from] DatabaseError),
}

/// A string-keyed, string-valued store. Writes replace the whole slot.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

// ═══════════════════════════════════════════════════════════
// SQLite-backed storage
// ═══════════════════════════════════════════════════════════

pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Open (or create) the storage database at `path`.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let conn = db::open_database(path)?;
        tracing::debug!(path = %path.display(), "Local storage opened");
        Ok(Self { conn })
    }

    /// Open storage at `path`, recovering from an unusable file.
    ///
    /// A file that cannot be opened or migrated is renamed to
    /// `<name>.corrupt` and a fresh database is created in its place.
    /// If that fails as well, storage falls back to memory for this run.
    pub fn open_or_recover(path: &Path) -> Result<Self, StorageError> {
        let err = match Self::open(path) {
            Ok(storage) => return Ok(storage),
            Err(e) => e,
        };
        tracing::warn!(
            path = %path.display(),
            error = %err,
            "Local storage unusable, starting fresh"
        );

        let mut quarantine = path.as_os_str().to_owned();
        quarantine.push(".corrupt");
        if let Err(e) = std::fs::rename(path, &quarantine) {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Could not move unusable storage aside"
            );
        }

        match Self::open(path) {
            Ok(storage) => Ok(storage),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Local storage unavailable, keeping notifications in memory"
                );
                Self::in_memory()
            }
        }
    }

    /// Ephemeral storage backed by an in-memory database.
    pub fn in_memory() -> Result<Self, StorageError> {
        Ok(Self {
            conn: db::open_memory_database()?,
        })
    }
}

impl KeyValueStore for SqliteStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(db::repository::get_item(&self.conn, key)?)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        Ok(db::repository::set_item(&self.conn, key, value)?)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        Ok(db::repository::remove_item(&self.conn, key)?)
    }
}

// ═══════════════════════════════════════════════════════════
// In-memory storage
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated storage, e.g. a slot left behind by an earlier session.
    pub fn with_item(key: &str, value: &str) -> Self {
        let mut items = HashMap::new();
        items.insert(key.to_string(), value.to_string());
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.items.remove(key);
        Ok(())
    }
}
