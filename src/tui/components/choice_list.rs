//! # Choice List Component
//!
//! The body of both screens: one line per checklist or item, with the `>`
//! cursor marker and `[x]` check marker from the view model. The cursor row is
//! highlighted and kept in view by ratatui's `ListState`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};

use crate::core::view::Row;
use crate::tui::component::Component;

pub struct ChoiceList<'a> {
    pub rows: &'a [Row],
    pub empty_hint: &'a str,
    /// Dim the list while the text prompt has focus.
    pub dimmed: bool,
}

impl<'a> ChoiceList<'a> {
    pub fn new(rows: &'a [Row], empty_hint: &'a str, dimmed: bool) -> Self {
        Self {
            rows,
            empty_hint,
            dimmed,
        }
    }

    fn row_style(&self, row: &Row) -> Style {
        let style = if row.current {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else if row.checked {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Gray)
        };
        if self.dimmed {
            style.add_modifier(Modifier::DIM)
        } else {
            style
        }
    }
}

impl Component for ChoiceList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1));

        if self.rows.is_empty() {
            let empty = Paragraph::new(self.empty_hint)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .rows
            .iter()
            .map(|row| ListItem::new(Line::from(Span::styled(row.to_string(), self.row_style(row)))))
            .collect();

        let mut list_state = ListState::default();
        list_state.select(self.rows.iter().position(|row| row.current));

        frame.render_stateful_widget(List::new(items).block(block), area, &mut list_state);
    }
}
