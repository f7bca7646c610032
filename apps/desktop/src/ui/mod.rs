//! TUI Module - Inventory screen
//!
//! Architecture:
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      RENDER LAYER (render.rs)                       │
//! │  Pure drawing. No business logic. Reads InventoryView.              │
//! └─────────────────────────────────────────────────────────────────────┘
//!                               ▲
//!                               │ InventoryView
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      INPUT LAYER (events.rs)                        │
//! │  KeyEvent → Action. Edits text and marks, emits Commands.           │
//! └─────────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼ Command
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      STATE LAYER (state::view)                      │
//! │  InventoryView::dispatch → one store call + refresh.                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

mod app;
mod events;
mod render;

pub use app::TuiApp;
pub use events::{handle_key_event, Action};
pub use render::render;

use crate::state::{ConfigState, DbState};

/// Run the inventory screen
pub async fn run(db: DbState, config: ConfigState) -> anyhow::Result<()> {
    TuiApp::new(db, config).run().await
}
