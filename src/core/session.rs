//! # Sessions
//!
//! Named chats listed in the left panel. A session is identified by its
//! position in the list; its label is `Chat N` where N is that position
//! plus one. Sessions are only ever appended, never renamed or removed.
//!
//! Sessions live in memory for the lifetime of the process. Nothing is
//! written to disk.

use chrono::{DateTime, Local};

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub label: String,
    pub created_at: DateTime<Local>,
}

impl Session {
    /// Creates the session that will sit at `index` in the list.
    pub fn at_index(index: usize) -> Self {
        Self {
            label: label_for(index),
            created_at: Local::now(),
        }
    }

    /// Creation time as "14:02", shown next to the label.
    pub fn created_label(&self) -> String {
        self.created_at.format("%H:%M").to_string()
    }
}

/// Label for the session at `index` (0-based).
pub fn label_for(index: usize) -> String {
    format!("Chat {}", index + 1)
}

/// Ordered list of sessions plus the active position.
#[derive(Debug, Clone, Default)]
pub struct SessionList {
    sessions: Vec<Session>,
    active: Option<usize>,
}

impl SessionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new session, makes it active and returns its index.
    pub fn create(&mut self) -> usize {
        let index = self.sessions.len();
        self.sessions.push(Session::at_index(index));
        self.active = Some(index);
        index
    }

    /// Makes `index` active. Returns false (and changes nothing) when the
    /// index does not exist.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.sessions.len() {
            return false;
        }
        self.active = Some(index);
        true
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn active_session(&self) -> Option<&Session> {
        self.active.and_then(|i| self.sessions.get(i))
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_one_based() {
        assert_eq!(label_for(0), "Chat 1");
        assert_eq!(label_for(9), "Chat 10");
    }

    #[test]
    fn create_appends_and_activates() {
        let mut list = SessionList::new();
        assert_eq!(list.active(), None);

        assert_eq!(list.create(), 0);
        assert_eq!(list.create(), 1);

        assert_eq!(list.len(), 2);
        assert_eq!(list.active(), Some(1));
        assert_eq!(list.sessions()[1].label, "Chat 2");
        assert_eq!(list.active_session().map(|s| s.label.as_str()), Some("Chat 2"));
    }

    #[test]
    fn select_out_of_range_is_rejected() {
        let mut list = SessionList::new();
        list.create();
        assert!(!list.select(3));
        assert_eq!(list.active(), Some(0));
    }

    #[test]
    fn select_existing_moves_active() {
        let mut list = SessionList::new();
        list.create();
        list.create();
        assert!(list.select(0));
        assert_eq!(list.active(), Some(0));
    }

    #[test]
    fn created_label_is_hour_minute() {
        let session = Session::at_index(0);
        let label = session.created_label();
        assert_eq!(label.len(), 5);
        assert_eq!(&label[2..3], ":");
    }
}
