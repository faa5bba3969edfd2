//! # Application State
//!
//! Everything the session controller owns. No TUI types live here;
//! presentation state is in the `tui` module.
//!
//! ```text
//! App
//! ├── generator: Arc<dyn TextGenerator>  // generation service client
//! ├── sessions: SessionList              // left panel labels + active index
//! ├── conversation: Conversation         // messages of the active chat
//! ├── next_words: NextWords              // words to generate, 3..=15
//! ├── is_loading: bool                   // a request is outstanding
//! ├── status_message: String             // title bar text
//! └── endpoint: String                   // shown in the title bar
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::core::config::ResolvedConfig;
use crate::core::conversation::Conversation;
use crate::core::next_words::NextWords;
use crate::core::session::SessionList;
use crate::generation::TextGenerator;

pub struct App {
    pub generator: Arc<dyn TextGenerator>,
    pub sessions: SessionList,
    pub conversation: Conversation,
    pub next_words: NextWords,
    pub is_loading: bool,
    pub status_message: String,
    pub endpoint: String,
}

impl App {
    pub fn new(generator: Arc<dyn TextGenerator>, endpoint: String) -> Self {
        Self {
            generator,
            sessions: SessionList::new(),
            conversation: Conversation::new(),
            next_words: NextWords::default(),
            is_loading: false,
            status_message: String::from("Welcome to Quill!"),
            endpoint,
        }
    }

    pub fn from_config(generator: Arc<dyn TextGenerator>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(generator, config.endpoint.clone());
        app.next_words = config.next_words;
        app
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{stub_generator, test_app};

    use super::*;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome to Quill!");
        assert!(!app.is_loading);
        assert!(app.conversation.is_empty());
        assert!(app.sessions.is_empty());
        assert_eq!(app.sessions.active(), None);
        assert_eq!(app.next_words, NextWords::default());
    }

    #[test]
    fn test_from_config_takes_next_words() {
        let config = ResolvedConfig {
            endpoint: "http://example:9000".to_string(),
            next_words: NextWords::new(12),
        };
        let app = App::from_config(stub_generator(), &config);
        assert_eq!(app.next_words.get(), 12);
        assert_eq!(app.endpoint, "http://example:9000");
    }
}
