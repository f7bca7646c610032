//! # Commands Module
//!
//! Every operation the inventory screen can perform.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── medicine.rs  ◄─── Add, list, search, edit, delete, total value
//! └── export.rs    ◄─── CSV snapshot
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Key press (ui::events)                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Command::Search  ──►  InventoryView::dispatch                          │
//! │                              │                                          │
//! │                              ▼                                          │
//! │  async fn search_medicines(                                             │
//! │      db: &DbState,         ◄── Passed in by the view                   │
//! │      query: &str,          ◄── From the search bar                     │
//! │  ) -> Result<Vec<Medicine>, ApiError>                                   │
//! │                              │                                          │
//! │                              ▼                                          │
//! │  View refreshes rows + total, or shows a notice                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands only need the database; they never touch view state.

pub mod export;
pub mod medicine;
