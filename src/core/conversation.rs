//! # Conversation
//!
//! The messages shown in the center pane. Messages are immutable once
//! pushed; the conversation only grows until it is cleared by a session
//! switch.

use serde::{Deserialize, Serialize};

/// Text appended as a bot message whenever a generation request fails.
pub const GENERATION_ERROR_TEXT: &str = "An error occurred while generating text.";

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
        }
    }
}

/// Ordered, append-only message sequence for the active session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_order() {
        let mut conv = Conversation::new();
        conv.push(Message::user("hello"));
        conv.push(Message::bot("hi there"));
        assert_eq!(
            conv.messages(),
            &[Message::user("hello"), Message::bot("hi there")]
        );
    }

    #[test]
    fn clear_empties_everything() {
        let mut conv = Conversation::new();
        conv.push(Message::user("a"));
        conv.clear();
        assert!(conv.is_empty());
        assert_eq!(conv.len(), 0);
    }

    #[test]
    fn sender_serializes_lowercase() {
        let json = serde_json::to_string(&Message::bot("x")).unwrap();
        assert_eq!(json, r#"{"sender":"bot","text":"x"}"#);
    }
}
