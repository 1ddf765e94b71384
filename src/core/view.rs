//! # View Model
//!
//! `view()` reads the current `App` and describes the next frame: a heading,
//! one row per choice, the text prompt if one is open, and a help line. It
//! never changes state. The TUI styles this; `Display` prints it as plain text:
//!
//! ```text
//! Home
//!
//! > [x] dishes
//!   [ ] laundry
//!
//! New item
//! > socks
//!
//! enter save • esc cancel
//! ```

use std::fmt;

use crate::core::state::{App, View};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub label: String,
    /// Cursor is on this row.
    pub current: bool,
    /// Completed item. Always false on the Checklists screen.
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub label: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub heading: String,
    pub rows: Vec<Row>,
    /// Shown when there are no rows.
    pub empty_hint: &'static str,
    pub prompt: Option<Prompt>,
    pub status: String,
    pub help: &'static str,
}

const CHECKLISTS_HELP: &str = "↑/↓ move • enter open • n new • q quit";
const DETAIL_HELP: &str = "↑/↓ move • space toggle • n new • d delete • b back • q quit";
const INPUT_HELP: &str = "enter save • esc cancel";

pub fn view(app: &App) -> ViewModel {
    let (heading, rows, empty_hint) = match &app.view {
        View::Checklists => {
            let rows: Vec<Row> = app
                .checklists
                .iter()
                .enumerate()
                .map(|(i, checklist)| Row {
                    label: checklist.title.clone(),
                    current: i == app.cursor,
                    checked: false,
                })
                .collect();
            ("Checklists".to_string(), rows, "No checklists yet. Press n to create one.")
        }
        View::ChecklistDetail(checklist) => {
            let rows: Vec<Row> = app
                .items
                .iter()
                .enumerate()
                .map(|(i, item)| Row {
                    label: item.title.clone(),
                    current: i == app.cursor,
                    checked: app.selected.contains(&item.id),
                })
                .collect();
            (checklist.title.clone(), rows, "Nothing here. Press n to add an item.")
        }
    };

    let prompt = app.input.as_ref().map(|input| Prompt {
        label: input.target.prompt().to_string(),
        text: input.buffer.clone(),
    });

    let help = match (&prompt, &app.view) {
        (Some(_), _) => INPUT_HELP,
        (None, View::Checklists) => CHECKLISTS_HELP,
        (None, View::ChecklistDetail(_)) => DETAIL_HELP,
    };

    ViewModel {
        heading,
        rows,
        empty_hint,
        prompt,
        status: app.status_message.clone(),
        help,
    }
}

impl Row {
    pub fn cursor_marker(&self) -> char {
        if self.current { '>' } else { ' ' }
    }

    pub fn check_marker(&self) -> char {
        if self.checked { 'x' } else { ' ' }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {}", self.cursor_marker(), self.check_marker(), self.label)
    }
}

impl fmt::Display for ViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;
        writeln!(f)?;
        if self.rows.is_empty() {
            writeln!(f, "{}", self.empty_hint)?;
        }
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        if let Some(prompt) = &self.prompt {
            writeln!(f)?;
            writeln!(f, "{}", prompt.label)?;
            writeln!(f, "> {}", prompt.text)?;
        }
        if !self.status.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.status)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.help)
    }
}
