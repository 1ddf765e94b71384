//! # TitleBar Component
//!
//! Top line of the screen: the current heading (Checklists, or the open
//! checklist's title) and the last status message, if any.
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"Groceries | Update failed: item not found: 4"`
//! 2. **Default**: `"Groceries"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Top status bar component showing the heading and status.
pub struct TitleBar<'a> {
    pub heading: &'a str,
    pub status_message: &'a str,
}

impl<'a> TitleBar<'a> {
    pub fn new(heading: &'a str, status_message: &'a str) -> Self {
        Self {
            heading,
            status_message,
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            self.heading.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                self.status_message.to_string(),
                Style::default().fg(Color::Yellow),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
