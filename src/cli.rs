//! # Command-line Flags
//!
//! The non-interactive mode. Each requested operation runs on its own, in a
//! fixed order, and prints its own rendered buffer:
//!
//! ```text
//! --new-checklist → -a → -c → -r → -l → --checklists
//! ```
//!
//! The first failure stops the run and is returned to `main`, which exits
//! non-zero.

use std::io::Write;

use log::info;

use crate::core::error::Result;
use crate::core::item;
use crate::core::render::{render_checklists, write_list};
use crate::core::store::ChecklistStore;

/// The operations requested on the command line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FlagOps {
    pub new_checklist: Option<String>,
    pub add: Option<String>,
    pub check: Option<i64>,
    pub remove: Option<i64>,
    pub list: bool,
    pub list_checklists: bool,
    /// Scope for add and list.
    pub checklist: Option<i64>,
}

impl FlagOps {
    /// True when no operation was requested, i.e. the TUI should start.
    pub fn is_empty(&self) -> bool {
        self.new_checklist.is_none()
            && self.add.is_none()
            && self.check.is_none()
            && self.remove.is_none()
            && !self.list
            && !self.list_checklists
    }
}

pub fn run_flags<W: Write>(
    store: &dyn ChecklistStore,
    ops: &FlagOps,
    show_ids: bool,
    out: &mut W,
) -> Result<()> {
    if let Some(checklist) = ops.checklist {
        // Fail early on a bad scope instead of after a partial run
        store.get_checklist(checklist)?;
    }

    if let Some(title) = &ops.new_checklist {
        let id = store.insert_checklist(title)?;
        info!("Created checklist {id} ({title:?})");
        let checklists = store.list_checklists()?;
        out.write_all(render_checklists(&checklists).as_bytes())?;
    }

    if let Some(title) = &ops.add {
        let id = store.insert_item(title, false, ops.checklist)?;
        info!("Added item {id} ({title:?})");
        let items = store.list_items(ops.checklist)?;
        write_list(out, &items, show_ids)?;
    }

    if let Some(id) = ops.check {
        let items = store.list_items(None)?;
        let current = item::find_item(&items, id)?;
        let completed = !current.completed;
        store.set_completed(id, completed)?;
        info!("Set item {id} completed={completed}");
        let items = item::toggle_item(items, id);
        write_list(out, &items, show_ids)?;
    }

    if let Some(id) = ops.remove {
        let items = store.list_items(None)?;
        item::find_item(&items, id)?;
        store.delete_item(id)?;
        info!("Removed item {id}");
        let items = item::remove_item(items, id);
        write_list(out, &items, show_ids)?;
    }

    if ops.list {
        let items = store.list_items(ops.checklist)?;
        write_list(out, &items, show_ids)?;
    }

    if ops.list_checklists {
        let checklists = store.list_checklists()?;
        out.write_all(render_checklists(&checklists).as_bytes())?;
    }

    out.flush()?;
    Ok(())
}
