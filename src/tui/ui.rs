//! Screen layout: title bar on top, then three columns.
//!
//! ```text
//! ┌──────────────────────── title bar ───────────────────────┐
//! │ sessions (25%) │ conversation        │ settings (25%)    │
//! │                ├─────────────────────┤                   │
//! │                │ input               │                   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! `Regions::compute` is shared by the renderer and the mouse hit-test so a
//! click always lands on what was drawn.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};

use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::input_box::INPUT_HEIGHT;
use crate::tui::components::settings_panel::gauge_area;
use crate::tui::components::{MessageList, SessionPanel, SettingsPanel, TitleBar};
use crate::tui::{Focus, TuiState};

/// Screen areas of every pane for one frame size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub title: Rect,
    pub sessions: Rect,
    pub messages: Rect,
    pub input: Rect,
    pub settings: Rect,
}

impl Regions {
    pub fn compute(area: Rect) -> Self {
        use Constraint::{Length, Min, Percentage};

        let [title, body] = Layout::vertical([Length(1), Min(0)]).areas(area);
        let [sessions, center, settings] =
            Layout::horizontal([Percentage(25), Min(0), Percentage(25)]).areas(body);
        let [messages, input] = Layout::vertical([Min(0), Length(INPUT_HEIGHT)]).areas(center);

        Self {
            title,
            sessions,
            messages,
            input,
            settings,
        }
    }

    /// The pane under a screen position, if any is focusable.
    pub fn focus_at(&self, column: u16, row: u16) -> Option<Focus> {
        let position = Position::new(column, row);
        if self.sessions.contains(position) {
            Some(Focus::Sessions)
        } else if self.input.contains(position) {
            Some(Focus::Input)
        } else if self.settings.contains(position) {
            Some(Focus::Settings)
        } else {
            None
        }
    }

    /// Gauge row inside the settings pane.
    pub fn settings_gauge(&self) -> Rect {
        gauge_area(self.settings)
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let regions = Regions::compute(frame.area());

    TitleBar::new(
        app.endpoint.clone(),
        app.status_message.clone(),
        !tui.message_list.stick_to_bottom,
    )
    .render(frame, regions.title);

    SessionPanel::new(
        &mut tui.session_panel,
        app.sessions.sessions(),
        app.sessions.active(),
        tui.focus == Focus::Sessions,
    )
    .render(frame, regions.sessions);

    MessageList::new(
        &mut tui.message_list,
        app.conversation.messages(),
        app.is_loading,
        spinner_frame,
    )
    .render(frame, regions.messages);

    tui.input_box.render(frame, regions.input);

    SettingsPanel::new(
        &mut tui.settings_panel,
        app.next_words,
        tui.focus == Focus::Settings,
    )
    .render(frame, regions.settings);
}
