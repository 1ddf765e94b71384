//! # Items and Checklists
//!
//! The data model plus the pure list operations. Every mutator takes the list
//! by value and hands back the new one, so callers never share a list they
//! didn't mean to:
//!
//! ```text
//! list ──add_item(item)──────▶ list'
//! list ──complete_item(id)───▶ list'
//! list ──remove_item(id)─────▶ list'
//! ```
//!
//! Ids are trusted as given. Uniqueness comes from the store's autoincrement,
//! so these functions act on the first match and stop.

use crate::core::error::{Error, Result};

/// One checklist entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Store-assigned id.
    pub id: i64,
    pub title: String,
    pub completed: bool,
    /// Owning checklist. `None` for loose items added from the command line.
    pub checklist_id: Option<i64>,
}

/// A named group of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checklist {
    pub id: i64,
    pub title: String,
}

/// Appends `item` to the end of `list`. No duplicate check.
pub fn add_item(mut list: Vec<Item>, item: Item) -> Vec<Item> {
    list.push(item);
    list
}

/// Returns the first item whose id is `id`.
pub fn find_item(list: &[Item], id: i64) -> Result<&Item> {
    list.iter()
        .find(|item| item.id == id)
        .ok_or(Error::ItemNotFound(id))
}

pub fn complete_item(list: Vec<Item>, id: i64) -> Vec<Item> {
    set_completed(list, id, true)
}

pub fn incomplete_item(list: Vec<Item>, id: i64) -> Vec<Item> {
    set_completed(list, id, false)
}

/// Flips the completion flag of the matching item. Absent ids are a no-op.
pub fn toggle_item(mut list: Vec<Item>, id: i64) -> Vec<Item> {
    if let Some(item) = list.iter_mut().find(|item| item.id == id) {
        item.completed = !item.completed;
    }
    list
}

/// Removes the first item with `id`, keeping the others in order.
///
/// An absent id leaves the list untouched.
pub fn remove_item(mut list: Vec<Item>, id: i64) -> Vec<Item> {
    if let Some(pos) = list.iter().position(|item| item.id == id) {
        list.remove(pos);
    }
    list
}

fn set_completed(mut list: Vec<Item>, id: i64, completed: bool) -> Vec<Item> {
    if let Some(item) = list.iter_mut().find(|item| item.id == id) {
        item.completed = completed;
    }
    list
}
