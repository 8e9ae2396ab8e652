//! Header bell shown on every page.
//!
//! The badge reads the notification store's published summary and has
//! no counter of its own. The bell only owns whether its dropdown panel
//! is open.

use tokio::sync::watch;

use crate::notifications::NotificationSummary;

/// Read-only view of the store's unread count for the page header.
#[derive(Debug, Clone)]
pub struct HeaderBadge {
    summary: watch::Receiver<NotificationSummary>,
}

impl HeaderBadge {
    pub fn new(summary: watch::Receiver<NotificationSummary>) -> Self {
        Self { summary }
    }

    pub fn unread(&self) -> usize {
        self.summary.borrow().unread_count
    }

    /// Badge text; empty when nothing is unread.
    pub fn text(&self) -> String {
        self.summary.borrow().badge_text()
    }

    /// True once per store mutation that has not been observed yet.
    pub fn needs_redraw(&mut self) -> bool {
        let changed = self.summary.has_changed().unwrap_or(false);
        if changed {
            self.summary.borrow_and_update();
        }
        changed
    }
}

/// Bell button plus its dropdown panel.
#[derive(Debug, Clone)]
pub struct NotificationBell {
    badge: HeaderBadge,
    panel_open: bool,
}

impl NotificationBell {
    /// Panel starts closed.
    pub fn new(badge: HeaderBadge) -> Self {
        Self {
            badge,
            panel_open: false,
        }
    }

    pub fn badge(&self) -> &HeaderBadge {
        &self.badge
    }

    pub fn badge_mut(&mut self) -> &mut HeaderBadge {
        &mut self.badge
    }

    pub fn is_open(&self) -> bool {
        self.panel_open
    }

    /// Value for the bell's `aria-expanded` attribute.
    pub fn aria_expanded(&self) -> &'static str {
        if self.panel_open {
            "true"
        } else {
            "false"
        }
    }

    pub fn toggle(&mut self) {
        self.panel_open = !self.panel_open;
    }

    pub fn open(&mut self) {
        self.panel_open = true;
    }

    pub fn close(&mut self) {
        self.panel_open = false;
    }

    /// Page click handler: clicks outside both the bell and its panel close it.
    pub fn on_page_click(&mut self, inside_bell_or_panel: bool) {
        if !inside_bell_or_panel {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::NotificationStore;
    use crate::storage::MemoryStorage;

    fn bell_for(store: &NotificationStore<MemoryStorage>) -> NotificationBell {
        NotificationBell::new(HeaderBadge::new(store.subscribe()))
    }

    #[test]
    fn badge_follows_store() {
        let mut store = NotificationStore::init(MemoryStorage::new());
        let mut bell = bell_for(&store);
        assert_eq!(bell.badge().text(), "3");
        assert!(!bell.badge_mut().needs_redraw());

        store.toggle_read(1).unwrap();
        assert!(bell.badge_mut().needs_redraw());
        assert_eq!(bell.badge().unread(), 2);
        assert!(!bell.badge_mut().needs_redraw());

        store.mark_all_read().unwrap();
        assert_eq!(bell.badge().text(), "");
    }

    #[test]
    fn two_pages_share_one_count() {
        let mut store = NotificationStore::init(MemoryStorage::new());
        let first = HeaderBadge::new(store.subscribe());
        let second = HeaderBadge::new(store.subscribe());
        store.toggle_read(2).unwrap();
        assert_eq!(first.unread(), second.unread());
        assert_eq!(first.text(), "2");
    }

    #[test]
    fn panel_toggles_and_closes_on_outside_click() {
        let store = NotificationStore::init(MemoryStorage::new());
        let mut bell = bell_for(&store);
        assert!(!bell.is_open());
        assert_eq!(bell.aria_expanded(), "false");

        bell.toggle();
        assert!(bell.is_open());
        assert_eq!(bell.aria_expanded(), "true");

        bell.on_page_click(true);
        assert!(bell.is_open());
        bell.on_page_click(false);
        assert!(!bell.is_open());

        bell.open();
        bell.toggle();
        assert!(!bell.is_open());
    }
}
