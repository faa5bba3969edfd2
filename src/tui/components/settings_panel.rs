//! # Settings Panel Component
//!
//! Right column with the word-count slider.
//!
//! The authoritative value lives in `App::next_words`. The panel keeps a
//! local `slider_value` that is overwritten from the prop on every render,
//! so a change the app rejected or clamped never lingers on screen.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Gauge, Paragraph, Wrap};

use crate::core::next_words::NextWords;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Events emitted by the settings panel.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsEvent {
    /// The slider moved to this value.
    Changed(u8),
}

/// Persistent state for the settings panel.
pub struct SettingsPanelState {
    pub slider_value: NextWords,
}

impl Default for SettingsPanelState {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsPanelState {
    pub fn new() -> Self {
        Self {
            slider_value: NextWords::default(),
        }
    }

    /// Overwrite the local mirror with the authoritative value.
    pub fn sync(&mut self, value: NextWords) {
        self.slider_value = value;
    }

    fn set(&mut self, value: NextWords) -> Option<SettingsEvent> {
        if value == self.slider_value {
            return None;
        }
        self.slider_value = value;
        Some(SettingsEvent::Changed(value.get()))
    }

    /// Resolve a click at screen column `x` on the gauge row.
    pub fn click(&mut self, gauge: Rect, x: u16) -> Option<SettingsEvent> {
        if gauge.width < 2 || x < gauge.x || x >= gauge.x + gauge.width {
            return None;
        }
        let span = u32::from(NextWords::MAX - NextWords::MIN);
        let offset = u32::from(x - gauge.x);
        let last = u32::from(gauge.width - 1);
        let step = (offset * span + last / 2) / last;
        let value = NextWords::MIN as u32 + step;
        self.set(NextWords::new(u8::try_from(value).unwrap_or(NextWords::MAX)))
    }
}

impl EventHandler for SettingsPanelState {
    type Event = SettingsEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let next = match event {
            TuiEvent::CursorLeft | TuiEvent::CursorDown | TuiEvent::InputChar('-') => {
                self.slider_value.decrement()
            }
            TuiEvent::CursorRight | TuiEvent::CursorUp | TuiEvent::InputChar('+') => {
                self.slider_value.increment()
            }
            TuiEvent::CursorHome => NextWords::new(NextWords::MIN),
            TuiEvent::CursorEnd => NextWords::new(NextWords::MAX),
            _ => return None,
        };
        self.set(next)
    }
}

/// Row layout inside the bordered panel: label, gauge, scale, count, help.
fn split(inner: Rect) -> [Rect; 6] {
    Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .areas(inner)
}

/// Where the gauge lands inside the panel `area` (for mouse hit-testing).
pub fn gauge_area(area: Rect) -> Rect {
    split(Block::bordered().inner(area))[1]
}

/// "3" on the left, "9" centred, "15" on the right.
fn scale_line(width: u16) -> String {
    let min = NextWords::MIN.to_string();
    let mid = NextWords::midpoint().to_string();
    let max = NextWords::MAX.to_string();
    let width = width as usize;
    if width < min.len() + mid.len() + max.len() + 2 {
        return format!("{min} {mid} {max}");
    }
    let mid_start = (width - mid.len()) / 2;
    let left_gap = mid_start - min.len();
    let right_gap = width - mid_start - mid.len() - max.len();
    format!(
        "{min}{}{mid}{}{max}",
        " ".repeat(left_gap),
        " ".repeat(right_gap)
    )
}

/// Transient render wrapper for the settings panel.
pub struct SettingsPanel<'a> {
    state: &'a mut SettingsPanelState,
    value: NextWords,
    focused: bool,
}

impl<'a> SettingsPanel<'a> {
    pub fn new(state: &'a mut SettingsPanelState, value: NextWords, focused: bool) -> Self {
        Self {
            state,
            value,
            focused,
        }
    }
}

impl<'a> Component for SettingsPanel<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.sync(self.value);
        let value = self.state.slider_value;

        let border_style = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(" Settings ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [label_area, gauge, scale, count, help, _] = split(inner);

        frame.render_widget(
            Paragraph::new(format!("Number of Words to Generate: {value}"))
                .wrap(Wrap { trim: true }),
            label_area,
        );

        frame.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
                .ratio(value.ratio())
                .label(""),
            gauge,
        );

        frame.render_widget(
            Paragraph::new(scale_line(scale.width)).style(Style::default().fg(Color::DarkGray)),
            scale,
        );

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("{value} words"),
                Style::default().add_modifier(Modifier::BOLD),
            ))),
            count,
        );

        if self.focused {
            frame.render_widget(
                Paragraph::new("←/→ adjust  Home/End min/max")
                    .style(Style::default().fg(Color::DarkGray))
                    .wrap(Wrap { trim: true }),
                help,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn arrows_step_and_saturate() {
        let mut state = SettingsPanelState::new();
        assert_eq!(
            state.handle_event(&TuiEvent::CursorRight),
            Some(SettingsEvent::Changed(9))
        );
        assert_eq!(
            state.handle_event(&TuiEvent::CursorDown),
            Some(SettingsEvent::Changed(8))
        );

        assert_eq!(
            state.handle_event(&TuiEvent::CursorEnd),
            Some(SettingsEvent::Changed(15))
        );
        assert_eq!(state.handle_event(&TuiEvent::CursorUp), None);

        assert_eq!(
            state.handle_event(&TuiEvent::CursorHome),
            Some(SettingsEvent::Changed(3))
        );
        assert_eq!(state.handle_event(&TuiEvent::CursorLeft), None);
    }

    #[test]
    fn unrelated_events_are_ignored() {
        let mut state = SettingsPanelState::new();
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
        assert_eq!(state.handle_event(&TuiEvent::InputChar('a')), None);
    }

    #[test]
    fn sync_overwrites_local_value() {
        let mut state = SettingsPanelState::new();
        state.handle_event(&TuiEvent::CursorEnd);
        state.sync(NextWords::new(5));
        assert_eq!(state.slider_value.get(), 5);
    }

    #[test]
    fn click_maps_column_to_value() {
        let mut state = SettingsPanelState::new();
        let gauge = Rect::new(10, 3, 13, 1);

        assert_eq!(state.click(gauge, 10), Some(SettingsEvent::Changed(3)));
        assert_eq!(state.click(gauge, 22), Some(SettingsEvent::Changed(15)));
        assert_eq!(state.click(gauge, 16), Some(SettingsEvent::Changed(9)));
        assert_eq!(state.click(gauge, 9), None);
        assert_eq!(state.click(gauge, 23), None);
    }

    #[test]
    fn scale_line_places_marks() {
        let line = scale_line(11);
        assert_eq!(line.len(), 11);
        assert!(line.starts_with('3'));
        assert!(line.ends_with("15"));
        assert_eq!(&line[5..6], "9");
    }

    #[test]
    fn render_shows_label_and_count() {
        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = SettingsPanelState::new();

        terminal
            .draw(|f| SettingsPanel::new(&mut state, NextWords::new(12), false).render(f, f.area()))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Number of Words to Generate: 12"));
        assert!(text.contains("12 words"));
        assert_eq!(state.slider_value.get(), 12);
    }
}
