//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as props:
//! - `TitleBar`: Top status bar showing the endpoint and status
//! - `Message`: Individual conversation message rendering
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep presentation state and emit events upward:
//! - `InputBox`: Single-line prompt entry
//! - `MessageList`: Scrollable conversation view with layout caching
//! - `SessionPanel`: "New Chat" plus the session list
//! - `SettingsPanel`: Word-count gauge
//!
//! Stateful components are split into a persistent `...State` kept in
//! `TuiState` and a transient wrapper built each frame with borrowed props.
//! Components never touch `App`; their events are turned into `Action`s by
//! the event loop.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs      (Top status bar)
//! ├── message.rs        (Single message renderer)
//! ├── message_list.rs   (Scrollable message container)
//! ├── session_panel.rs  (Left column)
//! ├── settings_panel.rs (Right column)
//! └── input_box/        (Prompt entry)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod input_box;
pub mod message;
pub use input_box::{InputBox, InputEvent};
pub mod message_list;
pub use message_list::{MessageList, MessageListState};
pub mod session_panel;
pub use session_panel::{SessionPanel, SessionPanelEvent, SessionPanelState};
pub mod settings_panel;
pub use settings_panel::{SettingsEvent, SettingsPanel, SettingsPanelState};
