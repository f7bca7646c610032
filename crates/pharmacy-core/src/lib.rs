//! # pharmacy-core: Pure Domain Logic for the Pharmacy Stock Manager
//!
//! This crate holds the medicine record type and every input rule a record
//! must satisfy before it is written. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Pharmacy Stock Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Terminal UI (apps/desktop)                      │   │
//! │  │     Form ──► Search ──► Table ──► Edit dialog ──► Export        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Command                                │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ pharmacy-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐  ┌───────────────┐  ┌───────────────┐      │   │
//! │  │   │    types      │  │  validation   │  │    error      │      │   │
//! │  │   │  Medicine     │  │  name / qty   │  │ Validation-   │      │   │
//! │  │   │ MedicineDraft │  │  price parse  │  │ Error         │      │   │
//! │  │   └───────────────┘  └───────────────┘  └───────────────┘      │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO TERMINAL • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 pharmacy-db (Database Layer)                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use pharmacy_core::MedicineDraft;
//!
//! // Raw form text goes in, a validated draft comes out
//! let draft = MedicineDraft::parse("Paracetamol", "100", "2.50").unwrap();
//! assert_eq!(draft.quantity(), 100);
//! assert_eq!(draft.stock_value(), 250.0);
//!
//! // Bad input never reaches the database
//! assert!(MedicineDraft::parse("Paracetamol", "ten", "2.50").is_err());
//! ```

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a medicine name.
pub const MAX_NAME_LEN: usize = 200;

/// Maximum length of a search query. Any full name is a valid query.
pub const MAX_QUERY_LEN: usize = MAX_NAME_LEN;
