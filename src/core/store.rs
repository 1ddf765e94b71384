//! # Checklist Store
//!
//! Persistence behind a trait so the controller can be driven by any backend.
//! `SqliteStore` keeps everything in one local database file with two tables:
//!
//! ```text
//! checklists (id, title)
//! items      (id, title, completed, checklist_id → checklists.id)
//! ```
//!
//! Every call is a single statement or query. Nothing spans calls, nothing is
//! batched.

use std::path::Path;

use log::{debug, info};
use rusqlite::{Connection, OptionalExtension, params};

use crate::core::error::{Error, Result};
use crate::core::item::{Checklist, Item};

const SCHEMA: &str = r"
CREATE TABLE IF NOT EXISTS checklists (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    completed BOOLEAN NOT NULL DEFAULT 0,
    checklist_id INTEGER REFERENCES checklists(id)
);
";

/// Storage operations for items and checklists.
pub trait ChecklistStore {
    /// Creates the tables if they don't exist. Safe to call on every startup.
    fn ensure_schema(&self) -> Result<()>;

    /// Inserts an item and returns its new id.
    fn insert_item(&self, title: &str, completed: bool, checklist_id: Option<i64>) -> Result<i64>;

    /// Lists items in insertion order, optionally only those of one checklist.
    fn list_items(&self, checklist_id: Option<i64>) -> Result<Vec<Item>>;

    fn get_item(&self, id: i64) -> Result<Item>;

    fn set_completed(&self, id: i64, completed: bool) -> Result<()>;

    fn delete_item(&self, id: i64) -> Result<()>;

    /// Inserts a checklist and returns its new id.
    fn insert_checklist(&self, title: &str) -> Result<i64>;

    fn list_checklists(&self) -> Result<Vec<Checklist>>;

    fn get_checklist(&self, id: i64) -> Result<Checklist>;
}

/// SQLite-backed store on a single connection.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) the database at `path` and makes sure the schema exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        info!("Opened database at {}", path.display());
        Self::from_connection(conn)
    }

    /// A throwaway in-memory database.
    pub fn in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let store = Self { conn };
        store.ensure_schema()?;
        Ok(store)
    }

    fn parse_item(row: &rusqlite::Row) -> rusqlite::Result<Item> {
        Ok(Item {
            id: row.get(0)?,
            title: row.get(1)?,
            completed: row.get(2)?,
            checklist_id: row.get(3)?,
        })
    }

    fn parse_checklist(row: &rusqlite::Row) -> rusqlite::Result<Checklist> {
        Ok(Checklist {
            id: row.get(0)?,
            title: row.get(1)?,
        })
    }
}

impl ChecklistStore for SqliteStore {
    fn ensure_schema(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    fn insert_item(&self, title: &str, completed: bool, checklist_id: Option<i64>) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO items (title, completed, checklist_id) VALUES (?1, ?2, ?3)",
            params![title, completed, checklist_id],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!("Inserted item {id} ({title:?}) into checklist {checklist_id:?}");
        Ok(id)
    }

    fn list_items(&self, checklist_id: Option<i64>) -> Result<Vec<Item>> {
        let items = match checklist_id {
            Some(checklist_id) => {
                let mut stmt = self.conn.prepare(
                    "SELECT id, title, completed, checklist_id FROM items
                     WHERE checklist_id = ?1 ORDER BY id ASC",
                )?;
                stmt.query_map(params![checklist_id], Self::parse_item)?
                    .collect::<rusqlite::Result<Vec<_>>>()?
            }
            None => {
                let mut stmt = self.conn.prepare(
                    "SELECT id, title, completed, checklist_id FROM items ORDER BY id ASC",
                )?;
                stmt.query_map([], Self::parse_item)?
                    .collect::<rusqlite::Result<Vec<_>>>()?
            }
        };
        Ok(items)
    }

    fn get_item(&self, id: i64) -> Result<Item> {
        self.conn
            .query_row(
                "SELECT id, title, completed, checklist_id FROM items WHERE id = ?1",
                params![id],
                Self::parse_item,
            )
            .optional()?
            .ok_or(Error::ItemNotFound(id))
    }

    fn set_completed(&self, id: i64, completed: bool) -> Result<()> {
        let rows = self.conn.execute(
            "UPDATE items SET completed = ?1 WHERE id = ?2",
            params![completed, id],
        )?;
        if rows == 0 {
            return Err(Error::ItemNotFound(id));
        }
        debug!("Set item {id} completed={completed}");
        Ok(())
    }

    fn delete_item(&self, id: i64) -> Result<()> {
        let rows = self
            .conn
            .execute("DELETE FROM items WHERE id = ?1", params![id])?;
        if rows == 0 {
            return Err(Error::ItemNotFound(id));
        }
        debug!("Deleted item {id}");
        Ok(())
    }

    fn insert_checklist(&self, title: &str) -> Result<i64> {
        self.conn
            .execute("INSERT INTO checklists (title) VALUES (?1)", params![title])?;
        let id = self.conn.last_insert_rowid();
        debug!("Inserted checklist {id} ({title:?})");
        Ok(id)
    }

    fn list_checklists(&self) -> Result<Vec<Checklist>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title FROM checklists ORDER BY id ASC")?;
        let checklists = stmt
            .query_map([], Self::parse_checklist)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(checklists)
    }

    fn get_checklist(&self, id: i64) -> Result<Checklist> {
        self.conn
            .query_row(
                "SELECT id, title FROM checklists WHERE id = ?1",
                params![id],
                Self::parse_checklist,
            )
            .optional()?
            .ok_or(Error::ChecklistNotFound(id))
    }
}
