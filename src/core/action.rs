//! # Actions
//!
//! Everything the user can do becomes an `Action`. The terminal layer only
//! translates key presses; what a key *means* depends on the screen and is
//! decided here.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! Store calls happen inline and block until done. A failed call is logged and
//! shown in the status bar, and the screen keeps what it had.

use log::{debug, info};

use crate::core::state::{App, InputTarget, TextInput, View};

/// Terminal-independent input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    Enter,
    Char(char),
    Paste(String),
    Backspace,
    Escape,
    /// Ctrl+C. Quits even while typing.
    ForceQuit,
}

/// What the caller should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Redraw,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("Action: {action:?}");
    if action == Action::ForceQuit {
        return Effect::Quit;
    }
    if app.input.is_some() {
        return handle_text_input(app, action);
    }
    match app.view {
        View::Checklists => handle_checklists(app, action),
        View::ChecklistDetail(_) => handle_detail(app, action),
    }
}

fn handle_checklists(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Up | Action::Char('k') => move_cursor_up(app),
        Action::Down | Action::Char('j') => move_cursor_down(app),
        Action::Enter | Action::Char('l') => open_checklist(app),
        Action::Char('n') => {
            app.input = Some(TextInput::new(InputTarget::AddChecklist));
            Effect::Redraw
        }
        Action::Char('q') => Effect::Quit,
        _ => Effect::None,
    }
}

fn handle_detail(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Up | Action::Char('k') => move_cursor_up(app),
        Action::Down | Action::Char('j') => move_cursor_down(app),
        Action::Enter | Action::Char(' ') | Action::Char('x') => toggle_under_cursor(app),
        Action::Char('d') => delete_under_cursor(app),
        Action::Char('n') => match app.active_checklist() {
            Some(checklist) => {
                let target = InputTarget::AddItem {
                    checklist_id: checklist.id,
                };
                app.input = Some(TextInput::new(target));
                Effect::Redraw
            }
            None => Effect::None,
        },
        Action::Char('b') | Action::Char('h') | Action::Escape => back_to_checklists(app),
        Action::Char('q') => Effect::Quit,
        _ => Effect::None,
    }
}

/// Routes keys into the open prompt. Only Ctrl+C escapes it besides Esc/Enter.
fn handle_text_input(app: &mut App, action: Action) -> Effect {
    let Some(input) = app.input.as_mut() else {
        return Effect::None;
    };
    match action {
        Action::Char(c) => {
            input.buffer.push(c);
            Effect::Redraw
        }
        Action::Paste(text) => {
            // Titles are single-line
            input
                .buffer
                .extend(text.chars().filter(|c| *c != '\n' && *c != '\r'));
            Effect::Redraw
        }
        Action::Backspace => match input.buffer.pop() {
            Some(_) => Effect::Redraw,
            None => Effect::None,
        },
        Action::Escape => {
            app.input = None;
            Effect::Redraw
        }
        Action::Enter => commit_text_input(app),
        Action::Up | Action::Down | Action::ForceQuit => Effect::None,
    }
}

fn commit_text_input(app: &mut App) -> Effect {
    let Some(input) = app.input.as_ref() else {
        return Effect::None;
    };
    let title = input.buffer.trim().to_string();
    if title.is_empty() {
        return Effect::None;
    }
    let target = input.target;
    app.input = None;

    match target {
        InputTarget::AddChecklist => {
            let created = app.store.insert_checklist(&title);
            if let Some(id) = app.report("Create checklist failed", created) {
                info!("Created checklist {id} ({title:?})");
                let reloaded = app.reload_checklists();
                app.report("Reload failed", reloaded);
            }
        }
        InputTarget::AddItem { checklist_id } => {
            let created = app.store.insert_item(&title, false, Some(checklist_id));
            if let Some(id) = app.report("Add item failed", created) {
                info!("Added item {id} ({title:?}) to checklist {checklist_id}");
                let reloaded = app.reload_items();
                app.report("Reload failed", reloaded);
            }
        }
    }
    Effect::Redraw
}

fn move_cursor_up(app: &mut App) -> Effect {
    if app.cursor > 0 {
        app.cursor -= 1;
        Effect::Redraw
    } else {
        Effect::None
    }
}

fn move_cursor_down(app: &mut App) -> Effect {
    if app.cursor + 1 < app.choice_count() {
        app.cursor += 1;
        Effect::Redraw
    } else {
        Effect::None
    }
}

fn open_checklist(app: &mut App) -> Effect {
    let Some(checklist) = app.checklist_under_cursor().cloned() else {
        return Effect::None;
    };
    let loaded = app.store.list_items(Some(checklist.id));
    let Some(items) = app.report("Load items failed", loaded) else {
        return Effect::Redraw;
    };
    info!("Opened checklist {} ({:?})", checklist.id, checklist.title);
    app.selected = items
        .iter()
        .filter(|item| item.completed)
        .map(|item| item.id)
        .collect();
    app.items = items;
    app.view = View::ChecklistDetail(checklist);
    app.cursor = 0;
    Effect::Redraw
}

fn toggle_under_cursor(app: &mut App) -> Effect {
    let Some(id) = app.item_under_cursor().map(|item| item.id) else {
        return Effect::None;
    };
    let completed = !app.selected.remove(&id);
    if completed {
        app.selected.insert(id);
    }
    let saved = app.store.set_completed(id, completed);
    app.report("Update failed", saved);
    let reloaded = app.reload_items();
    app.report("Reload failed", reloaded);
    Effect::Redraw
}

fn delete_under_cursor(app: &mut App) -> Effect {
    let Some(id) = app.item_under_cursor().map(|item| item.id) else {
        return Effect::None;
    };
    let deleted = app.store.delete_item(id);
    app.report("Delete failed", deleted);
    app.selected.remove(&id);
    let reloaded = app.reload_items();
    app.report("Reload failed", reloaded);

    // Steps back one row, but never from row 1 or above it.
    if app.cursor > 1 {
        app.cursor -= 1;
    }
    app.cursor = app.cursor.min(app.items.len().saturating_sub(1));
    Effect::Redraw
}

fn back_to_checklists(app: &mut App) -> Effect {
    app.view = View::Checklists;
    app.items.clear();
    app.selected.clear();
    app.cursor = 0;
    let reloaded = app.reload_checklists();
    app.report("Reload failed", reloaded);
    Effect::Redraw
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::{ChecklistStore, SqliteStore};

    /// An app with one checklist "Home" holding `titles`, all incomplete.
    fn app_with_items(titles: &[&str]) -> App {
        let store = SqliteStore::in_memory().unwrap();
        let list = store.insert_checklist("Home").unwrap();
        for title in titles {
            store.insert_item(title, false, Some(list)).unwrap();
        }
        App::new(Box::new(store)).unwrap()
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            update(app, Action::Char(c));
        }
    }

    fn titles(app: &App) -> Vec<String> {
        app.items.iter().map(|i| i.title.clone()).collect()
    }

    #[test]
    fn test_cursor_clamps_without_wrapping() {
        let store = SqliteStore::in_memory().unwrap();
        store.insert_checklist("a").unwrap();
        store.insert_checklist("b").unwrap();
        let mut app = App::new(Box::new(store)).unwrap();

        assert_eq!(update(&mut app, Action::Up), Effect::None);
        assert_eq!(app.cursor, 0);
        assert_eq!(update(&mut app, Action::Down), Effect::Redraw);
        assert_eq!(app.cursor, 1);
        assert_eq!(update(&mut app, Action::Char('j')), Effect::None);
        assert_eq!(app.cursor, 1);
        update(&mut app, Action::Char('k'));
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_cursor_on_empty_list_stays_put() {
        let mut app = App::new(Box::new(SqliteStore::in_memory().unwrap())).unwrap();
        update(&mut app, Action::Down);
        assert_eq!(app.cursor, 0);
        assert_eq!(update(&mut app, Action::Enter), Effect::None);
        assert_eq!(app.view, View::Checklists);
    }

    #[test]
    fn test_enter_opens_checklist_under_cursor() {
        let mut app = app_with_items(&["dishes", "laundry"]);
        update(&mut app, Action::Enter);

        assert!(matches!(&app.view, View::ChecklistDetail(c) if c.title == "Home"));
        assert_eq!(app.cursor, 0);
        assert_eq!(titles(&app), vec!["dishes", "laundry"]);
        assert!(app.selected.is_empty());
    }

    #[test]
    fn test_quit_from_both_views() {
        let mut app = app_with_items(&["a"]);
        assert_eq!(update(&mut app, Action::Char('q')), Effect::Quit);
        update(&mut app, Action::Enter);
        assert_eq!(update(&mut app, Action::Char('q')), Effect::Quit);
        assert_eq!(update(&mut app, Action::ForceQuit), Effect::Quit);
    }

    #[test]
    fn test_new_checklist_via_text_input() {
        let mut app = App::new(Box::new(SqliteStore::in_memory().unwrap())).unwrap();
        update(&mut app, Action::Char('n'));
        assert_eq!(app.input, Some(TextInput::new(InputTarget::AddChecklist)));
        assert_eq!(app.view, View::Checklists);

        // 'q' is text while typing, not quit
        type_text(&mut app, "quick");
        assert_eq!(app.input.as_ref().unwrap().buffer, "quick");
        update(&mut app, Action::Backspace);
        assert_eq!(app.input.as_ref().unwrap().buffer, "quic");

        update(&mut app, Action::Enter);
        assert!(app.input.is_none());
        assert_eq!(app.checklists.len(), 1);
        assert_eq!(app.checklists[0].title, "quic");
    }

    #[test]
    fn test_escape_cancels_text_input() {
        let mut app = App::new(Box::new(SqliteStore::in_memory().unwrap())).unwrap();
        update(&mut app, Action::Char('n'));
        type_text(&mut app, "never saved");
        update(&mut app, Action::Escape);

        assert!(app.input.is_none());
        assert!(app.checklists.is_empty());
        assert!(app.store.list_checklists().unwrap().is_empty());
    }

    #[test]
    fn test_blank_text_input_is_not_committed() {
        let mut app = App::new(Box::new(SqliteStore::in_memory().unwrap())).unwrap();
        update(&mut app, Action::Char('n'));
        type_text(&mut app, "   ");
        assert_eq!(update(&mut app, Action::Enter), Effect::None);
        assert!(app.input.is_some());
        assert!(app.checklists.is_empty());
    }

    #[test]
    fn test_paste_drops_newlines() {
        let mut app = App::new(Box::new(SqliteStore::in_memory().unwrap())).unwrap();
        update(&mut app, Action::Char('n'));
        update(&mut app, Action::Paste("two\nlines".to_string()));
        assert_eq!(app.input.as_ref().unwrap().buffer, "twolines");
    }

    #[test]
    fn test_add_item_goes_to_active_checklist() {
        let mut app = app_with_items(&["first"]);
        update(&mut app, Action::Enter);
        update(&mut app, Action::Char('n'));
        assert!(matches!(
            app.input.as_ref().map(|i| i.target),
            Some(InputTarget::AddItem { .. })
        ));
        type_text(&mut app, "  second  ");
        update(&mut app, Action::Enter);

        assert!(app.input.is_none());
        assert_eq!(titles(&app), vec!["first", "second"]);
        let checklist_id = app.active_checklist().unwrap().id;
        assert!(app.items.iter().all(|i| i.checklist_id == Some(checklist_id)));
    }

    #[test]
    fn test_toggle_persists_and_flips_back() {
        let mut app = app_with_items(&["a", "b"]);
        update(&mut app, Action::Enter);
        update(&mut app, Action::Down);

        update(&mut app, Action::Char(' '));
        let id = app.items[1].id;
        assert!(app.selected.contains(&id));
        assert!(app.items[1].completed);
        assert!(app.store.get_item(id).unwrap().completed);

        update(&mut app, Action::Char('x'));
        assert!(!app.selected.contains(&id));
        assert!(!app.store.get_item(id).unwrap().completed);
    }

    #[test]
    fn test_delete_steps_cursor_back_above_floor() {
        let mut app = app_with_items(&["a", "b", "c", "d"]);
        update(&mut app, Action::Enter);
        update(&mut app, Action::Down);
        update(&mut app, Action::Down);
        assert_eq!(app.cursor, 2);

        update(&mut app, Action::Char('d'));
        assert_eq!(titles(&app), vec!["a", "b", "d"]);
        assert_eq!(app.cursor, 1);

        // Row 1 is the floor
        update(&mut app, Action::Char('d'));
        assert_eq!(titles(&app), vec!["a", "d"]);
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn test_delete_last_row_keeps_cursor_in_range() {
        let mut app = app_with_items(&["a", "b"]);
        update(&mut app, Action::Enter);
        update(&mut app, Action::Down);
        update(&mut app, Action::Char('d'));
        assert_eq!(titles(&app), vec!["a"]);
        assert_eq!(app.cursor, 0);

        update(&mut app, Action::Char('d'));
        assert!(app.items.is_empty());
        assert_eq!(app.cursor, 0);
        assert_eq!(update(&mut app, Action::Char('d')), Effect::None);
    }

    #[test]
    fn test_delete_removes_from_selection() {
        let mut app = app_with_items(&["a"]);
        update(&mut app, Action::Enter);
        update(&mut app, Action::Enter);
        assert_eq!(app.selected.len(), 1);
        update(&mut app, Action::Char('d'));
        assert!(app.selected.is_empty());
    }

    #[test]
    fn test_back_returns_to_checklists() {
        let mut app = app_with_items(&["a", "b"]);
        update(&mut app, Action::Enter);
        update(&mut app, Action::Down);
        app.store.insert_checklist("Added elsewhere").unwrap();

        update(&mut app, Action::Char('b'));
        assert_eq!(app.view, View::Checklists);
        assert!(app.active_checklist().is_none());
        assert_eq!(app.cursor, 0);
        assert_eq!(app.checklists.len(), 2);
    }

    #[test]
    fn test_store_failure_leaves_view_and_reports() {
        let mut app = app_with_items(&["a"]);
        update(&mut app, Action::Enter);
        let id = app.items[0].id;
        // Delete behind the controller's back so the toggle misses.
        app.store.delete_item(id).unwrap();

        assert_eq!(update(&mut app, Action::Char(' ')), Effect::Redraw);
        assert!(app.status_message.starts_with("Update failed"));
        assert!(app.items.is_empty());
    }
}
