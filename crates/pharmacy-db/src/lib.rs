//! # pharmacy-db: Database Layer for the Pharmacy Stock Manager
//!
//! This crate is the Store. It owns the SQLite file and every query that
//! touches medicine records, using sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Pharmacy Stock Data Flow                            │
//! │                                                                         │
//! │  Command (add_medicine, search_medicines, ...)                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   pharmacy-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────────┐  ┌────────────┐  │   │
//! │  │   │   Database    │    │    Repository      │  │ Migrations │  │   │
//! │  │   │   (pool.rs)   │    │   (medicine.rs)    │  │ (embedded) │  │   │
//! │  │   │               │    │                    │  │            │  │   │
//! │  │   │  SqlitePool   │◄───│ MedicineRepository │  │ 001_create │  │   │
//! │  │   └───────────────┘    └────────────────────┘  └────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  pharmacy.db (local SQLite file, WAL mode)                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`pool`] - Connection pool and the `Database` handle
//! - [`migrations`] - Embedded schema
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pharmacy_core::MedicineDraft;
//! use pharmacy_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("pharmacy.db")).await?;
//!
//! let draft = MedicineDraft::parse("Paracetamol", "100", "2.50")?;
//! let id = db.medicines().create(&draft).await?;
//!
//! let total = db.medicines().total_value().await?;
//! ```

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::medicine::MedicineRepository;
