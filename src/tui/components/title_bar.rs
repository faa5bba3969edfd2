//! # TitleBar Component
//!
//! Top status bar showing the service endpoint and the current status.
//!
//! ## Conditional Formatting
//!
//! 1. **Unseen content**: `"Quill (endpoint: http://…) | Generating... | ↓ New"`,
//!    or `"Quill (endpoint: http://…) | ↓ New"` with no status
//! 2. **Status message**: `"Quill (endpoint: http://…) | Service ready"`
//! 3. **Default**: `"Quill (endpoint: http://…)"`
//!
//! TitleBar is purely presentational: every field is a prop.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Top status bar component.
///
/// # Props
///
/// - `endpoint`: Base URL of the generation service
/// - `status_message`: Transient status (e.g. "Generating...", "Service ready")
/// - `has_unseen_content`: The conversation is scrolled away from the newest message
pub struct TitleBar {
    pub endpoint: String,
    pub status_message: String,
    pub has_unseen_content: bool,
}

impl TitleBar {
    pub fn new(endpoint: String, status_message: String, has_unseen_content: bool) -> Self {
        Self {
            endpoint,
            status_message,
            has_unseen_content,
        }
    }

    fn text(&self) -> String {
        let base = format!("Quill (endpoint: {})", self.endpoint);
        match (self.status_message.is_empty(), self.has_unseen_content) {
            (true, true) => format!("{} | ↓ New", base),
            (false, true) => format!("{} | {} | ↓ New", base, self.status_message),
            (true, false) => base,
            (false, false) => format!("{} | {}", base, self.status_message),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::raw(self.text()),
            Span::styled(
                "   Tab focus · Ctrl+N new chat · Ctrl+Q quit",
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_bar_with_unseen_content() {
        let mut title_bar = TitleBar::new(
            "http://localhost:8000".to_string(),
            "Generating...".to_string(),
            true,
        );
        let text = render_text(&mut title_bar);

        assert!(text.contains("Quill (endpoint: http://localhost:8000)"));
        assert!(text.contains("Generating..."));
        assert!(text.contains("↓ New"));
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new(
            "http://gen:9000".to_string(),
            "Service ready".to_string(),
            false,
        );
        let text = render_text(&mut title_bar);

        assert!(text.contains("http://gen:9000"));
        assert!(text.contains("| Service ready"));
        assert!(!text.contains("↓ New"));
    }

    #[test]
    fn test_title_bar_unseen_content_without_status() {
        let title_bar = TitleBar::new("http://gen".to_string(), String::new(), true);
        assert_eq!(title_bar.text(), "Quill (endpoint: http://gen) | ↓ New");
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let title_bar = TitleBar::new("http://gen".to_string(), String::new(), false);
        assert_eq!(title_bar.text(), "Quill (endpoint: http://gen)");
    }
}
