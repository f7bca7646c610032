//! # State Module
//!
//! Application state for the inventory screen.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────────┐  ┌──────────────────┐          │
//! │  │   DbState    │  │  InventoryView   │  │   ConfigState    │          │
//! │  │              │  │                  │  │                  │          │
//! │  │  Database    │  │  rows, form,     │  │  store_name      │          │
//! │  │  (SQLite     │  │  marks, dialogs, │  │  currency        │          │
//! │  │   pool)      │  │  total           │  │                  │          │
//! │  └──────────────┘  └──────────────────┘  └──────────────────┘          │
//! │                                                                         │
//! │  • DbState: created once at startup, passed to every command           │
//! │  • InventoryView: owned by the UI loop, mutated only by dispatch       │
//! │    and key handling                                                     │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod db;
mod view;

pub use config::ConfigState;
pub use db::DbState;
pub use view::{
    Command, EditDialog, ExportPrompt, Focus, InventoryView, MedicineForm, Notice, NoticeLevel,
};
