//! # InputPrompt Component
//!
//! Shows the open text prompt ("New checklist" / "New item") with what has
//! been typed so far, and places the terminal cursor after it.
//!
//! ## State Management
//!
//! The buffer belongs to the core `App`; this component only draws it. When
//! the text is wider than the box, the tail is shown so the cursor stays
//! visible.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::Component;

/// Rows taken by the prompt, borders included.
pub const PROMPT_HEIGHT: u16 = 3;

pub struct InputPrompt<'a> {
    pub label: &'a str,
    pub text: &'a str,
}

impl<'a> InputPrompt<'a> {
    pub fn new(label: &'a str, text: &'a str) -> Self {
        Self { label, text }
    }
}

/// The longest suffix of `text` that fits in `width` columns, leaving one
/// column for the cursor.
fn visible_tail(text: &str, width: u16) -> &str {
    let budget = (width as usize).saturating_sub(1);
    let mut used = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}

impl Component for InputPrompt<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(2);
        let shown = visible_tail(self.text, inner_width);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", self.label));
        let input = Paragraph::new(shown)
            .block(block)
            .style(Style::default().fg(Color::Green));
        frame.render_widget(input, area);

        let cursor_x = area.x + 1 + shown.width() as u16;
        frame.set_cursor_position((cursor_x, area.y + 1));
    }
}
