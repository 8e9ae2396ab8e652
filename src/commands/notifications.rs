//! Notification center commands called by the UI shell.
//!
//! Six commands:
//! - `get_notification_view`: current filtered list, tabs and summary
//! - `set_notification_filter`: switch the category tab
//! - `toggle_notification_read`: row click
//! - `mark_all_notifications_read`: "Mark all read" button
//! - `clear_all_notifications`: "Clear all" button, behind a confirmation gate
//! - `get_notification_summary`: header text and badge value
//!
//! Mutating commands return the re-rendered view.

use crate::core_state::CoreState;
use crate::models::NotificationFilter;
use crate::notifications::{ConfirmationGate, NotificationSummary, NotificationView};

/// Renders the list for the active filter.
pub fn get_notification_view(state: &CoreState) -> Result<NotificationView, String> {
    let store = state.notifications().map_err(|e| e.to_string())?;
    Ok(store.render())
}

/// Sets the filter from a tab value (`all`, `appointment`, `report`,
/// `prescription`, `system`).
pub fn set_notification_filter(
    filter: String,
    state: &CoreState,
) -> Result<NotificationView, String> {
    let filter = filter
        .trim()
        .parse::<NotificationFilter>()
        .map_err(|e| e.to_string())?;
    let mut store = state.notifications().map_err(|e| e.to_string())?;
    Ok(store.set_filter(filter))
}

/// Flips the read flag of one notification. Unknown ids re-render unchanged.
pub fn toggle_notification_read(id: i64, state: &CoreState) -> Result<NotificationView, String> {
    let mut store = state.notifications().map_err(|e| e.to_string())?;
    store.toggle_read(id).map_err(|e| e.to_string())?;
    Ok(store.render())
}

pub fn mark_all_notifications_read(state: &CoreState) -> Result<NotificationView, String> {
    let mut store = state.notifications().map_err(|e| e.to_string())?;
    store.mark_all_read().map_err(|e| e.to_string())?;
    Ok(store.render())
}

/// Clears every notification if `gate` confirms. The gate is not asked
/// when the list is already empty.
pub fn clear_all_notifications(
    gate: &mut impl ConfirmationGate,
    state: &CoreState,
) -> Result<NotificationView, String> {
    let mut store = state.notifications().map_err(|e| e.to_string())?;
    store.clear_all(gate).map_err(|e| e.to_string())?;
    Ok(store.render())
}

pub fn get_notification_summary(state: &CoreState) -> Result<NotificationSummary, String> {
    let store = state.notifications().map_err(|e| e.to_string())?;
    Ok(store.summary())
}
