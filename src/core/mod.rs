//! # Core Application Logic
//!
//! This module contains the checklist business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Items (model)        │
//!                    │  • Store (SQLite)       │
//!                    │  • State + Action       │
//!                    │  • view() (frame model) │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │    CLI     │
//!             │  Adapter   │          │   flags    │
//!             │ (ratatui)  │          │            │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`item`]: `Item`, `Checklist` and the pure list operations
//! - [`render`]: plain-text rendering of item lists
//! - [`store`]: the `ChecklistStore` trait and its SQLite implementation
//! - [`state`]: the `App` struct, all interactive state in one place
//! - [`action`]: the `Action` enum and `update()`
//! - [`view`]: the frame model derived from `App`

pub mod action;
pub mod config;
pub mod error;
pub mod item;
pub mod render;
pub mod state;
pub mod store;
pub mod view;
