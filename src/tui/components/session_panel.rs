//! # Session Panel Component
//!
//! Left column listing chat sessions, with a "New Chat" row on top.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SessionPanelState` lives in `TuiState` and owns the highlight
//! - `SessionPanel` is created each frame with borrowed state and the
//!   session list from `App` as props

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState};

use crate::core::session::Session;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Row 0 of the list is always the "New Chat" entry.
const NEW_CHAT_ROW: usize = 0;

/// Events emitted by the session panel.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionPanelEvent {
    Create,
    Select(usize),
}

/// Persistent state for the session panel.
///
/// `selected` indexes panel rows, not sessions: row 0 is "New Chat" and
/// row `i + 1` is session `i`.
pub struct SessionPanelState {
    pub selected: usize,
    pub list_state: ListState,
    /// Number of sessions seen at the last render (bounds keyboard movement)
    session_count: usize,
}

impl Default for SessionPanelState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionPanelState {
    pub fn new() -> Self {
        Self {
            selected: NEW_CHAT_ROW,
            list_state: ListState::default().with_selected(Some(NEW_CHAT_ROW)),
            session_count: 0,
        }
    }

    /// Mirror the session count from `App` so Up/Down stay in bounds.
    pub fn sync(&mut self, session_count: usize) {
        self.session_count = session_count;
        self.selected = self.selected.min(session_count);
        self.list_state.select(Some(self.selected));
    }

    /// Move the highlight onto a session (after it was created or chosen).
    pub fn highlight_session(&mut self, index: usize) {
        self.session_count = self.session_count.max(index + 1);
        self.selected = index + 1;
        self.list_state.select(Some(self.selected));
    }

    fn event_for_row(row: usize) -> SessionPanelEvent {
        if row == NEW_CHAT_ROW {
            SessionPanelEvent::Create
        } else {
            SessionPanelEvent::Select(row - 1)
        }
    }

    /// Resolve a click at screen row `y` inside the panel `area`.
    ///
    /// Returns `None` for clicks on the border or below the last row.
    pub fn click(&mut self, area: Rect, y: u16) -> Option<SessionPanelEvent> {
        let inner = Block::bordered().inner(area);
        if y < inner.y || y >= inner.y + inner.height {
            return None;
        }
        let row = (y - inner.y) as usize + self.list_state.offset();
        if row > self.session_count {
            return None;
        }
        self.selected = row;
        self.list_state.select(Some(row));
        Some(Self::event_for_row(row))
    }
}

impl EventHandler for SessionPanelState {
    type Event = SessionPanelEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(self.session_count);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::Submit => Some(Self::event_for_row(self.selected)),
            TuiEvent::InputChar('n') => Some(SessionPanelEvent::Create),
            _ => None,
        }
    }
}

/// Transient render wrapper for the session panel.
pub struct SessionPanel<'a> {
    state: &'a mut SessionPanelState,
    sessions: &'a [Session],
    active: Option<usize>,
    focused: bool,
}

impl<'a> SessionPanel<'a> {
    pub fn new(
        state: &'a mut SessionPanelState,
        sessions: &'a [Session],
        active: Option<usize>,
        focused: bool,
    ) -> Self {
        Self {
            state,
            sessions,
            active,
            focused,
        }
    }
}

impl<'a> Component for SessionPanel<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.sync(self.sessions.len());

        let border_style = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(" Chat History ");

        let new_chat = ListItem::new(Line::from(Span::styled(
            "+ New Chat",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));

        let items: Vec<ListItem> = std::iter::once(new_chat)
            .chain(self.sessions.iter().enumerate().map(|(i, session)| {
                let is_active = self.active == Some(i);
                let marker = if is_active { "● " } else { "  " };
                let label_style = if is_active {
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Green)),
                    Span::styled(session.label.clone(), label_style),
                    Span::styled(
                        format!("  {}", session.created_label()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            }))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::SessionList;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn list_with(n: usize) -> SessionList {
        let mut list = SessionList::new();
        for _ in 0..n {
            list.create();
        }
        list
    }

    #[test]
    fn enter_on_new_chat_row_creates() {
        let mut state = SessionPanelState::new();
        state.sync(2);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(SessionPanelEvent::Create)
        );
    }

    #[test]
    fn arrows_move_within_bounds_and_enter_selects() {
        let mut state = SessionPanelState::new();
        state.sync(2);

        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected, 0);

        for _ in 0..5 {
            state.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(state.selected, 2);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(SessionPanelEvent::Select(1))
        );
    }

    #[test]
    fn n_key_creates() {
        let mut state = SessionPanelState::new();
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('n')),
            Some(SessionPanelEvent::Create)
        );
        assert_eq!(state.handle_event(&TuiEvent::InputChar('x')), None);
    }

    #[test]
    fn highlight_session_tracks_created_session() {
        let mut state = SessionPanelState::new();
        state.highlight_session(0);
        assert_eq!(state.selected, 1);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(SessionPanelEvent::Select(0))
        );
    }

    #[test]
    fn click_maps_rows_to_events() {
        let mut state = SessionPanelState::new();
        state.sync(2);
        let area = Rect::new(0, 1, 20, 10);

        // Border row
        assert_eq!(state.click(area, 1), None);
        // First inner row is "New Chat"
        assert_eq!(state.click(area, 2), Some(SessionPanelEvent::Create));
        // Second inner row is "Chat 1"
        assert_eq!(state.click(area, 3), Some(SessionPanelEvent::Select(0)));
        assert_eq!(state.selected, 1);
        assert_eq!(state.click(area, 4), Some(SessionPanelEvent::Select(1)));
        // Empty space below the list
        assert_eq!(state.click(area, 5), None);
    }

    #[test]
    fn render_marks_active_session() {
        let backend = TestBackend::new(30, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let sessions = list_with(2);
        let mut state = SessionPanelState::new();

        terminal
            .draw(|f| {
                SessionPanel::new(&mut state, sessions.sessions(), sessions.active(), true)
                    .render(f, f.area())
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row = |y: u16| -> String { (0..30u16).map(|x| buffer[(x, y)].symbol().to_string()).collect() };

        assert!(row(0).contains("Chat History"));
        assert!(row(1).contains("New Chat"));
        assert!(row(2).contains("Chat 1"));
        assert!(!row(2).contains('●'));
        assert!(row(3).contains("● Chat 2"));
    }
}
