//! # Application State
//!
//! Everything the interactive session knows, in one place. No terminal types
//! live here; the `tui` module only reads this and feeds it actions.
//!
//! ```text
//! App
//! ├── store: Box<dyn ChecklistStore>   // persistence
//! ├── view: View                       // which screen, and the active checklist
//! ├── cursor: usize                    // row under the `>` marker
//! ├── checklists: Vec<Checklist>       // choices on the Checklists screen
//! ├── items: Vec<Item>                 // choices on the detail screen
//! ├── selected: HashSet<i64>           // ids of completed items
//! ├── input: Option<TextInput>         // text prompt, when open
//! └── status_message: String           // last error or notice
//! ```
//!
//! The collections are reloaded wholesale from the store after every change.
//! State changes only happen through `update(state, action)` in action.rs.

use std::collections::HashSet;

use log::warn;

use crate::core::error::Result;
use crate::core::item::{Checklist, Item};
use crate::core::store::ChecklistStore;

/// Which screen is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Checklists,
    /// Items of the active checklist.
    ChecklistDetail(Checklist),
}

/// What committing the text prompt creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputTarget {
    AddChecklist,
    AddItem { checklist_id: i64 },
}

impl InputTarget {
    pub fn prompt(&self) -> &'static str {
        match self {
            InputTarget::AddChecklist => "New checklist",
            InputTarget::AddItem { .. } => "New item",
        }
    }
}

/// An open text prompt and what it's collecting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    pub target: InputTarget,
    pub buffer: String,
}

impl TextInput {
    pub fn new(target: InputTarget) -> Self {
        Self {
            target,
            buffer: String::new(),
        }
    }
}

pub struct App {
    pub store: Box<dyn ChecklistStore>,
    pub view: View,
    pub cursor: usize,
    pub checklists: Vec<Checklist>,
    pub items: Vec<Item>,
    pub selected: HashSet<i64>,
    pub input: Option<TextInput>,
    pub status_message: String,
}

impl App {
    /// Starts on the Checklists screen with the checklists already loaded.
    pub fn new(store: Box<dyn ChecklistStore>) -> Result<Self> {
        let checklists = store.list_checklists()?;
        Ok(Self {
            store,
            view: View::Checklists,
            cursor: 0,
            checklists,
            items: Vec::new(),
            selected: HashSet::new(),
            input: None,
            status_message: String::new(),
        })
    }

    /// The checklist whose items are showing, if any.
    pub fn active_checklist(&self) -> Option<&Checklist> {
        match &self.view {
            View::Checklists => None,
            View::ChecklistDetail(checklist) => Some(checklist),
        }
    }

    /// Number of rows the cursor can move over on the current screen.
    pub fn choice_count(&self) -> usize {
        match self.view {
            View::Checklists => self.checklists.len(),
            View::ChecklistDetail(_) => self.items.len(),
        }
    }

    pub fn item_under_cursor(&self) -> Option<&Item> {
        match self.view {
            View::Checklists => None,
            View::ChecklistDetail(_) => self.items.get(self.cursor),
        }
    }

    pub fn checklist_under_cursor(&self) -> Option<&Checklist> {
        match self.view {
            View::Checklists => self.checklists.get(self.cursor),
            View::ChecklistDetail(_) => None,
        }
    }

    pub fn reload_checklists(&mut self) -> Result<()> {
        self.checklists = self.store.list_checklists()?;
        Ok(())
    }

    /// Reloads the active checklist's items and rebuilds the selection from them.
    pub fn reload_items(&mut self) -> Result<()> {
        let Some(checklist_id) = self.active_checklist().map(|c| c.id) else {
            return Ok(());
        };
        self.items = self.store.list_items(Some(checklist_id))?;
        self.selected = self
            .items
            .iter()
            .filter(|item| item.completed)
            .map(|item| item.id)
            .collect();
        Ok(())
    }

    /// Logs a failed store call and shows it in the status bar.
    ///
    /// In-memory state is left as it was; the next successful reload catches up.
    pub fn report<T>(&mut self, context: &str, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("{context}: {e}");
                self.status_message = format!("{context}: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::SqliteStore;

    #[test]
    fn test_app_new_defaults() {
        let store = SqliteStore::in_memory().unwrap();
        store.insert_checklist("Groceries").unwrap();
        let app = App::new(Box::new(store)).unwrap();

        assert_eq!(app.view, View::Checklists);
        assert_eq!(app.cursor, 0);
        assert!(app.active_checklist().is_none());
        assert!(app.input.is_none());
        assert_eq!(app.checklists.len(), 1);
        assert_eq!(app.choice_count(), 1);
    }

    #[test]
    fn test_reload_items_rebuilds_selection() {
        let store = SqliteStore::in_memory().unwrap();
        let list = store.insert_checklist("Home").unwrap();
        let done = store.insert_item("done", true, Some(list)).unwrap();
        store.insert_item("todo", false, Some(list)).unwrap();

        let mut app = App::new(Box::new(store)).unwrap();
        app.view = View::ChecklistDetail(Checklist { id: list, title: "Home".to_string() });
        app.reload_items().unwrap();

        assert_eq!(app.items.len(), 2);
        assert_eq!(app.selected, HashSet::from([done]));
        assert_eq!(app.item_under_cursor().map(|i| i.title.as_str()), Some("done"));
    }

    #[test]
    fn test_report_sets_status_on_error() {
        let store = SqliteStore::in_memory().unwrap();
        let mut app = App::new(Box::new(store)).unwrap();

        let missing = app.store.delete_item(5);
        assert!(app.report("Delete failed", missing).is_none());
        assert_eq!(app.status_message, "Delete failed: item not found: 5");

        assert_eq!(app.report("unused", Ok(3)), Some(3));
    }

    #[test]
    fn test_input_target_prompts() {
        assert_eq!(InputTarget::AddChecklist.prompt(), "New checklist");
        assert_eq!(InputTarget::AddItem { checklist_id: 1 }.prompt(), "New item");
    }
}
