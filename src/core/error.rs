//! # Errors
//!
//! One error type for the whole crate. Lookups that miss carry the id that
//! was asked for, so callers can print something useful.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No item with this id exists in the list or the store.
    #[error("item not found: {0}")]
    ItemNotFound(i64),

    /// No checklist with this id exists in the store.
    #[error("checklist not found: {0}")]
    ChecklistNotFound(i64),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
