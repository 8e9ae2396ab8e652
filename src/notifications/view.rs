//! Rendered projection of the notification list.
//!
//! Everything here is plain data the shell draws; none of it holds a
//! reference back into the store.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{NotificationFilter, NotificationRecord};
use crate::notifications::time::display_time;

/// Placeholder text shown when the active filter matches nothing.
pub const EMPTY_PLACEHOLDER: &str = "No notifications in this category.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadState {
    Read,
    Unread,
}

/// What activating a row does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum RowAction {
    ToggleRead { id: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationRow {
    pub id: i64,
    pub category: String,
    pub state: ReadState,
    pub icon: &'static str,
    pub title: String,
    pub message: String,
    pub time_label: String,
    pub unread_dot: bool,
    pub on_activate: RowAction,
}

impl NotificationRow {
    fn project(record: &NotificationRecord, now: DateTime<Utc>) -> Self {
        Self {
            id: record.id,
            category: record.category.as_str().to_string(),
            state: if record.read {
                ReadState::Read
            } else {
                ReadState::Unread
            },
            icon: record.category.icon(),
            title: record.title.clone(),
            message: record.message.clone(),
            time_label: display_time(&record.time, now),
            unread_dot: !record.read,
            on_activate: RowAction::ToggleRead { id: record.id },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterTab {
    pub filter: NotificationFilter,
    pub label: &'static str,
    pub active: bool,
}

/// Either the matching rows or the single empty-state placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NotificationListing {
    Rows { rows: Vec<NotificationRow> },
    Empty { placeholder: &'static str },
}

/// Unread/total counts plus the header badge value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationSummary {
    pub unread_count: usize,
    pub total: usize,
    pub text: String,
    /// Present only when there is something unread; never `Some(0)`.
    pub badge: Option<usize>,
}

impl NotificationSummary {
    pub fn of(notifications: &[NotificationRecord]) -> Self {
        let total = notifications.len();
        let unread_count = notifications.iter().filter(|n| !n.read).count();
        Self {
            unread_count,
            total,
            text: format!("You have {unread_count} unread of {total} total notifications."),
            badge: (unread_count > 0).then_some(unread_count),
        }
    }

    /// Badge as display text; empty when suppressed.
    pub fn badge_text(&self) -> String {
        self.badge.map(|n| n.to_string()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationView {
    pub filter: NotificationFilter,
    pub tabs: Vec<FilterTab>,
    pub listing: NotificationListing,
    pub summary: NotificationSummary,
}

impl NotificationView {
    /// Ids of the displayed rows, in display order.
    pub fn displayed_ids(&self) -> Vec<i64> {
        match &self.listing {
            NotificationListing::Rows { rows } => rows.iter().map(|r| r.id).collect(),
            NotificationListing::Empty { .. } => Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.listing, NotificationListing::Empty { .. })
    }
}

/// Stable filter: keeps list order, never re-sorts.
pub fn filter_notifications(
    notifications: &[NotificationRecord],
    filter: NotificationFilter,
) -> Vec<&NotificationRecord> {
    notifications
        .iter()
        .filter(|n| filter.matches(&n.category))
        .collect()
}

/// Project `(notifications, filter)` into a view, resolving instants against `now`.
pub fn render(
    notifications: &[NotificationRecord],
    filter: NotificationFilter,
    now: DateTime<Utc>,
) -> NotificationView {
    let rows: Vec<NotificationRow> = filter_notifications(notifications, filter)
        .into_iter()
        .map(|n| NotificationRow::project(n, now))
        .collect();

    let listing = if rows.is_empty() {
        NotificationListing::Empty {
            placeholder: EMPTY_PLACEHOLDER,
        }
    } else {
        NotificationListing::Rows { rows }
    };

    let tabs = NotificationFilter::TABS
        .into_iter()
        .map(|tab| FilterTab {
            filter: tab,
            label: tab.label(),
            active: tab == filter,
        })
        .collect();

    NotificationView {
        filter,
        tabs,
        listing,
        summary: NotificationSummary::of(notifications),
    }
}
