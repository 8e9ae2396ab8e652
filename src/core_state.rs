//! Process-wide application state.
//!
//! `CoreState` is built once at startup by [`CoreState::init`] and
//! handed by reference to every command. It owns the single
//! `NotificationStore`; the `Mutex` gives one-operation-at-a-time
//! dispatch when the host calls in from several threads.

use std::sync::{Mutex, MutexGuard};

use thiserror::Error;

use crate::config::StoreConfig;
use crate::notifications::{NotificationStore, StoreError};
use crate::shell::HeaderBadge;
use crate::storage::{SqliteStorage, StorageError};

pub type AppNotificationStore = NotificationStore<SqliteStorage>;

pub struct CoreState {
    notifications: Mutex<AppNotificationStore>,
    config: StoreConfig,
}

impl CoreState {
    /// Open local storage under `config.data_dir` and load notifications.
    ///
    /// An unusable storage file does not stop startup; see
    /// [`SqliteStorage::open_or_recover`].
    pub fn init(config: StoreConfig) -> Result<Self, CoreError> {
        let path = config.storage_path();
        let storage = SqliteStorage::open_or_recover(&path)?;
        tracing::info!(path = %path.display(), "Core state initialized");
        Ok(Self::with_storage(storage, config))
    }

    /// State backed by an in-memory database; nothing outlives the process.
    pub fn in_memory() -> Result<Self, CoreError> {
        Ok(Self::with_storage(
            SqliteStorage::in_memory()?,
            StoreConfig::default(),
        ))
    }

    fn with_storage(storage: SqliteStorage, config: StoreConfig) -> Self {
        let store = NotificationStore::init_with_key(storage, &config.storage_key);
        Self {
            notifications: Mutex::new(store),
            config,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Lock the notification store for one operation.
    pub fn notifications(&self) -> Result<MutexGuard<'_, AppNotificationStore>, CoreError> {
        self.notifications.lock().map_err(|_| CoreError::LockPoisoned)
    }

    /// A header badge subscribed to this state's store.
    pub fn header_badge(&self) -> Result<HeaderBadge, CoreError> {
        Ok(HeaderBadge::new(self.notifications()?.subscribe()))
    }
}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Internal lock error")]
    LockPoisoned,
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("Notification store error: {0}")]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::default_notifications;
    use crate::storage::KeyValueStore;

    fn config_in(dir: &tempfile::TempDir) -> StoreConfig {
        StoreConfig {
            data_dir: dir.path().to_path_buf(),
            ..StoreConfig::default()
        }
    }

    #[test]
    fn init_creates_storage_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        let state = CoreState::init(config.clone()).unwrap();
        assert!(config.storage_path().exists());
        assert_eq!(state.notifications().unwrap().notifications().len(), 6);
    }

    #[test]
    fn init_reloads_previous_session() {
        let dir = tempfile::tempdir().unwrap();
        {
            let state = CoreState::init(config_in(&dir)).unwrap();
            state.notifications().unwrap().mark_all_read().unwrap();
        }
        let state = CoreState::init(config_in(&dir)).unwrap();
        assert_eq!(state.notifications().unwrap().summary().unread_count, 0);
    }

    #[test]
    fn init_seeds_defaults_over_corrupt_storage_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        std::fs::write(
            config.storage_path(),
            b"this is not a sqlite database, only junk bytes".repeat(64),
        )
        .unwrap();

        let state = CoreState::init(config.clone()).unwrap();
        let mut store = state.notifications().unwrap();
        assert_eq!(store.notifications(), default_notifications().as_slice());

        // The fresh file takes writes and survives a restart
        store.toggle_read(1).unwrap();
        drop(store);
        drop(state);
        let state = CoreState::init(config).unwrap();
        assert_eq!(state.notifications().unwrap().summary().unread_count, 2);
    }

    #[test]
    fn init_runs_in_memory_when_data_dir_unusable() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("Clinify");
        std::fs::write(&blocker, b"x").unwrap();
        let config = StoreConfig {
            data_dir: blocker,
            ..StoreConfig::default()
        };

        let state = CoreState::init(config).unwrap();
        let mut store = state.notifications().unwrap();
        assert_eq!(store.notifications().len(), 6);
        store.mark_all_read().unwrap();
        assert_eq!(store.summary().unread_count, 0);
    }

    #[test]
    fn init_uses_configured_key() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig {
            storage_key: "notifications_test".into(),
            ..config_in(&dir)
        };
        let state = CoreState::init(config).unwrap();
        let mut store = state.notifications().unwrap();
        store.toggle_read(1).unwrap();
        assert!(store.storage().get_item("notifications_test").unwrap().is_some());
    }

    #[test]
    fn header_badge_tracks_store() {
        let state = CoreState::in_memory().unwrap();
        let badge = state.header_badge().unwrap();
        assert_eq!(badge.text(), "3");
        state.notifications().unwrap().toggle_read(4).unwrap();
        assert_eq!(badge.text(), "2");
    }

    #[test]
    fn core_state_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CoreState>();
    }
}
