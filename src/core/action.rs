//! # Actions
//!
//! Everything that can happen in Quill becomes an `Action`.
//! User presses Enter? That's `Action::Submit(text)`.
//! Service responds? That's `Action::ResponseReceived(text)`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` describing the I/O the runtime should perform next. No side
//! effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::conversation::{GENERATION_ERROR_TEXT, Message};
use crate::core::next_words::NextWords;
use crate::core::state::App;
use crate::generation::{GenerateRequest, GenerationError};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// User submitted a prompt from the input box.
    Submit(String),
    /// "New Chat" pressed.
    NewSession,
    /// A session in the left panel was picked.
    SelectSession(usize),
    /// Settings panel changed the word count.
    SetNextWords(u8),
    /// The generation request finished with text.
    ResponseReceived(String),
    /// The generation request failed. Carries the reason for the log only.
    ResponseFailed(String),
    /// Result of the startup health probe.
    ServiceStatus(bool),
    Quit,
}

impl Action {
    /// Turns the outcome of a generation call into the completion action.
    pub fn from_generation(result: Result<String, GenerationError>) -> Self {
        match result {
            Ok(text) => Action::ResponseReceived(text),
            Err(e) => Action::ResponseFailed(e.to_string()),
        }
    }
}

/// I/O the runtime should perform after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Send this request to the generation service.
    SpawnRequest(GenerateRequest),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Submit(text) => {
            if text.trim().is_empty() {
                return Effect::None;
            }
            if app.is_loading {
                debug!("Submit ignored: a request is already outstanding");
                return Effect::None;
            }
            app.conversation.push(Message::user(text.clone()));
            app.is_loading = true;
            app.status_message = String::from("Generating...");
            Effect::SpawnRequest(GenerateRequest::new(text, app.next_words))
        }
        Action::NewSession => {
            app.sessions.create();
            app.conversation.clear();
            log_active_session(app, "Created");
            Effect::None
        }
        Action::SelectSession(index) => {
            if app.sessions.select(index) {
                app.conversation.clear();
                log_active_session(app, "Selected");
            } else {
                warn!(
                    "Ignoring selection of session {} (only {} exist)",
                    index,
                    app.sessions.len()
                );
            }
            Effect::None
        }
        Action::SetNextWords(value) => {
            app.next_words = NextWords::new(value);
            Effect::None
        }
        Action::ResponseReceived(text) => {
            app.conversation.push(Message::bot(text));
            app.is_loading = false;
            app.status_message.clear();
            Effect::None
        }
        Action::ResponseFailed(reason) => {
            warn!("Error generating text: {}", reason);
            app.conversation.push(Message::bot(GENERATION_ERROR_TEXT));
            app.is_loading = false;
            app.status_message = String::from("Last request failed");
            Effect::None
        }
        Action::ServiceStatus(reachable) => {
            // A late probe must not hide the "Generating..." status
            if app.is_loading {
                debug!("Service status {} arrived while loading", reachable);
                return Effect::None;
            }
            app.status_message = if reachable {
                String::from("Service ready")
            } else {
                String::from("Service unreachable")
            };
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn log_active_session(app: &App, verb: &str) {
    if let Some(session) = app.sessions.active_session() {
        info!(
            "{} {} (created {})",
            verb,
            session.label,
            session.created_label()
        );
    }
}
