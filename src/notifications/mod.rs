//! Notification center: the in-memory list, the active filter, and the
//! persisted mirror in local storage.
//!
//! The store owns the list. Every mutation writes the full list back to
//! its storage slot and republishes the summary; callers render
//! afterwards with [`NotificationStore::render`].

pub mod confirm;
pub mod seed;
pub mod time;
pub mod view;

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::watch;

use crate::config;
use crate::models::{NotificationFilter, NotificationRecord};
use crate::storage::{KeyValueStore, StorageError};

pub use confirm::{ConfirmationGate, Preanswered};
pub use seed::default_notifications;
pub use view::{NotificationSummary, NotificationView};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to write notifications: {0}")]
    Storage(#[from] StorageError),
    #[error("Failed to serialize notifications: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result of a clear-all request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// Nothing to clear; the gate was not consulted.
    AlreadyEmpty,
    Declined,
    Cleared { removed: usize },
}

// ═══════════════════════════════════════════════════════════
// Load / persist
// ═══════════════════════════════════════════════════════════

/// Read the persisted list, falling back to the default seed set.
///
/// Never fails: a missing slot, a storage read error, malformed JSON,
/// a non-array value, a record without a title, or duplicated ids all
/// yield [`default_notifications`].
pub fn load(storage: &impl KeyValueStore, key: &str) -> Vec<NotificationRecord> {
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(key, "No stored notifications, seeding defaults");
            return default_notifications();
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "Notification storage unreadable, seeding defaults");
            return default_notifications();
        }
    };

    match parse_stored(&raw) {
        Ok(list) => list,
        Err(reason) => {
            tracing::warn!(key, reason, "Stored notifications malformed, seeding defaults");
            default_notifications()
        }
    }
}

fn parse_stored(raw: &str) -> Result<Vec<NotificationRecord>, &'static str> {
    let list: Vec<NotificationRecord> =
        serde_json::from_str(raw).map_err(|_| "not a notification array")?;

    if !list.iter().all(NotificationRecord::is_well_formed) {
        return Err("record without title");
    }

    let mut seen = HashSet::with_capacity(list.len());
    if !list.iter().all(|n| seen.insert(n.id)) {
        return Err("duplicate notification id");
    }

    Ok(list)
}

/// Serialize the full list and overwrite the storage slot.
pub fn persist(
    storage: &mut impl KeyValueStore,
    key: &str,
    list: &[NotificationRecord],
) -> Result<(), StoreError> {
    let json = serde_json::to_string(list)?;
    storage.set_item(key, &json)?;
    Ok(())
}

// ═══════════════════════════════════════════════════════════
// NotificationStore
// ═══════════════════════════════════════════════════════════

pub struct NotificationStore<S: KeyValueStore> {
    storage: S,
    storage_key: String,
    notifications: Vec<NotificationRecord>,
    current_filter: NotificationFilter,
    summary_tx: watch::Sender<NotificationSummary>,
}

impl<S: KeyValueStore> NotificationStore<S> {
    /// Load from the default notifications slot.
    pub fn init(storage: S) -> Self {
        Self::init_with_key(storage, config::NOTIFICATIONS_STORAGE_KEY)
    }

    pub fn init_with_key(storage: S, storage_key: &str) -> Self {
        let notifications = load(&storage, storage_key);
        let (summary_tx, _) = watch::channel(NotificationSummary::of(&notifications));
        tracing::info!(
            count = notifications.len(),
            key = storage_key,
            "Notification store initialized"
        );
        Self {
            storage,
            storage_key: storage_key.to_string(),
            notifications,
            current_filter: NotificationFilter::All,
            summary_tx,
        }
    }

    pub fn notifications(&self) -> &[NotificationRecord] {
        &self.notifications
    }

    pub fn current_filter(&self) -> NotificationFilter {
        self.current_filter
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Write the current list to storage.
    pub fn persist(&mut self) -> Result<(), StoreError> {
        persist(&mut self.storage, &self.storage_key, &self.notifications)
    }

    /// Replace the active filter. Setting the same filter again is allowed.
    pub fn set_filter(&mut self, filter: NotificationFilter) -> NotificationView {
        tracing::debug!(%filter, "Notification filter set");
        self.current_filter = filter;
        self.render()
    }

    /// Flip the read flag of `id`. Returns false (and writes nothing)
    /// when no record has that id.
    pub fn toggle_read(&mut self, id: i64) -> Result<bool, StoreError> {
        let Some(record) = self.notifications.iter_mut().find(|n| n.id == id) else {
            tracing::debug!(id, "Toggle read ignored: unknown notification");
            return Ok(false);
        };
        record.read = !record.read;
        tracing::debug!(id, read = record.read, "Notification read state toggled");
        self.commit()?;
        Ok(true)
    }

    /// Mark every record read. Returns how many were unread before.
    pub fn mark_all_read(&mut self) -> Result<usize, StoreError> {
        let newly_read = self.notifications.iter().filter(|n| !n.read).count();
        self.notifications.iter_mut().for_each(|n| n.read = true);
        tracing::debug!(newly_read, "All notifications marked read");
        self.commit()?;
        Ok(newly_read)
    }

    /// Empty the list after the gate approves. An empty list skips the gate.
    pub fn clear_all(
        &mut self,
        gate: &mut impl ConfirmationGate,
    ) -> Result<ClearOutcome, StoreError> {
        if self.notifications.is_empty() {
            return Ok(ClearOutcome::AlreadyEmpty);
        }
        if !gate.confirm(config::CLEAR_ALL_PROMPT) {
            tracing::debug!("Clear all notifications declined");
            return Ok(ClearOutcome::Declined);
        }
        let removed = self.notifications.len();
        self.notifications.clear();
        tracing::info!(removed, "All notifications cleared");
        self.commit()?;
        Ok(ClearOutcome::Cleared { removed })
    }

    /// Current view, with instants resolved against the wall clock.
    pub fn render(&self) -> NotificationView {
        self.render_at(Utc::now())
    }

    pub fn render_at(&self, now: DateTime<Utc>) -> NotificationView {
        view::render(&self.notifications, self.current_filter, now)
    }

    pub fn summary(&self) -> NotificationSummary {
        NotificationSummary::of(&self.notifications)
    }

    /// Read-only feed of the summary, updated after every mutation.
    pub fn subscribe(&self) -> watch::Receiver<NotificationSummary> {
        self.summary_tx.subscribe()
    }

    /// Publish first so subscribers track the in-memory list even when
    /// the write fails.
    fn commit(&mut self) -> Result<(), StoreError> {
        self.summary_tx.send_replace(self.summary());
        self.persist()
    }
}
