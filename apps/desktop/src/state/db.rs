//! # Database State
//!
//! Wraps the `Database` handle that commands run against.
//!
//! The handle is created once in [`crate::run`] and passed explicitly to the
//! UI and every command; there is no process-wide database global.
//!
//! ## Usage in Commands
//! ```rust,ignore
//! pub async fn search_medicines(db: &DbState, query: &str) -> Result<Vec<Medicine>, ApiError> {
//!     Ok(db.inner().medicines().search(query).await?)
//! }
//! ```

use pharmacy_db::Database;

/// Wrapper around `Database` for the application layer.
#[derive(Debug, Clone)]
pub struct DbState {
    db: Database,
}

impl DbState {
    /// Creates a new DbState wrapping the database connection.
    pub fn new(db: Database) -> Self {
        DbState { db }
    }

    /// Returns a reference to the inner Database.
    pub fn inner(&self) -> &Database {
        &self.db
    }
}
