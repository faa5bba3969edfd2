//! Cursor position tracking for the single-line InputBox.
//!
//! `CursorState` owns the cursor byte offset and the horizontal scroll
//! offset. The text itself stays in `InputBox` and is passed in explicitly.

use super::text_edit::{TEXT_OFFSET, display_width, inner_width};
use ratatui::layout::Rect;

/// Cursor and horizontal scroll state, separated from the text buffer.
pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// Display columns hidden off the left edge
    pub scroll_offset: u16,
}

impl CursorState {
    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
        }
    }

    /// Reset cursor to start (used after Submit clears the buffer).
    pub fn reset(&mut self) {
        self.pos = 0;
        self.scroll_offset = 0;
    }

    /// Display column of the cursor within the whole buffer.
    pub fn column(&self, buffer: &str) -> u16 {
        display_width(&buffer[..self.pos])
    }

    /// Shift the view so the cursor column stays inside the visible width.
    pub fn update_scroll_offset(&mut self, buffer: &str, content_width: u16) {
        let width = inner_width(content_width);
        if width == 0 {
            self.scroll_offset = 0;
            return;
        }

        let column = self.column(buffer);
        if column < self.scroll_offset {
            self.scroll_offset = column;
        } else if column >= self.scroll_offset + width {
            self.scroll_offset = column - width + 1;
        }
    }

    /// Screen position (column, row) of the cursor for the given input area.
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let visible_col = self.column(buffer).saturating_sub(self.scroll_offset);
        (area.x + TEXT_OFFSET + visible_col, area.y + 1)
    }
}
