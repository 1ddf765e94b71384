//! # Rendering
//!
//! Turns items into text. Formatting is pure and returns `String`s so it can be
//! checked against literal expectations; `write_list` is the only place that
//! actually writes anywhere.
//!
//! ```text
//! [x] Task 1          ← render_item
//! 1.  [x] Task 1      ← render_item_numbered (id ≤ 9)
//! 10. [ ] Task 10     ← render_item_numbered (id > 9, one less pad)
//! ```
//!
//! In a numbered list the id column is as wide as the longest id, never
//! narrower than two digits, so the checkboxes line up past 99 too.

use std::io::{self, Write};

use crate::core::item::{Checklist, Item};

fn checkbox(item: &Item) -> &'static str {
    if item.completed { "[x]" } else { "[ ]" }
}

pub fn render_item(item: &Item) -> String {
    format!("{} {}\n", checkbox(item), item.title)
}

pub fn render_list(items: &[Item]) -> String {
    items.iter().map(render_item).collect()
}

const MIN_ID_DIGITS: usize = 2;

fn digits(id: i64) -> usize {
    id.to_string().len()
}

fn numbered_line(item: &Item, id_digits: usize) -> String {
    // One extra for the '.' after the id
    let label = format!("{}.", item.id);
    format!("{label:<width$} {} {}\n", checkbox(item), item.title, width = id_digits + 1)
}

/// Like `render_item`, prefixed with the id in a fixed-width column.
pub fn render_item_numbered(item: &Item) -> String {
    numbered_line(item, digits(item.id).max(MIN_ID_DIGITS))
}

pub fn render_list_numbered(items: &[Item]) -> String {
    let id_digits = items
        .iter()
        .map(|item| digits(item.id))
        .max()
        .unwrap_or(0)
        .max(MIN_ID_DIGITS);
    items.iter().map(|item| numbered_line(item, id_digits)).collect()
}

pub fn render_checklists(checklists: &[Checklist]) -> String {
    checklists
        .iter()
        .map(|c| format!("{}. {}\n", c.id, c.title))
        .collect()
}

/// Writes the rendered list to `out`.
pub fn write_list<W: Write>(out: &mut W, items: &[Item], numbered: bool) -> io::Result<()> {
    let text = if numbered {
        render_list_numbered(items)
    } else {
        render_list(items)
    };
    out.write_all(text.as_bytes())?;
    out.flush()
}
