//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::core::state::App;
use crate::core::store::{ChecklistStore, SqliteStore};

/// An app over an in-memory store holding checklists "Home" and "Work".
/// "Home" has "dishes" (done) and "laundry" (open).
pub fn test_app() -> App {
    let store = SqliteStore::in_memory().unwrap();
    let home = store.insert_checklist("Home").unwrap();
    store.insert_checklist("Work").unwrap();
    store.insert_item("dishes", true, Some(home)).unwrap();
    store.insert_item("laundry", false, Some(home)).unwrap();
    App::new(Box::new(store)).unwrap()
}

/// All cell symbols of the last drawn frame, row after row.
pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}
