//! # Medicine Commands
//!
//! Stock operations invoked by the inventory screen.
//!
//! ## Add Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Add Medicine Flow                                    │
//! │                                                                         │
//! │  Form: name="Paracetamol"  quantity="100"  price="2.50"                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  MedicineDraft::parse ── bad field? ──► ApiError::validation            │
//! │       │                                 (nothing is written)            │
//! │       ▼                                                                 │
//! │  MedicineRepository::create ──► new id                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Medicine { id, name, quantity, price }                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command takes the text exactly as typed; trimming and number
//! parsing happen in `pharmacy-core`.

use std::time::Instant;

use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::DbState;
use pharmacy_core::validation::validate_search_query;
use pharmacy_core::{Medicine, MedicineDraft};

/// Adds a medicine from raw form text.
///
/// ## Arguments
/// * `name` - Medicine name (trimmed, must not be empty)
/// * `quantity` - Whole number >= 0
/// * `price` - Decimal number >= 0
///
/// ## Returns
/// The stored medicine including its new id.
pub async fn add_medicine(
    db: &DbState,
    name: &str,
    quantity: &str,
    price: &str,
) -> Result<Medicine, ApiError> {
    let start = Instant::now();
    debug!(name = %name, quantity = %quantity, price = %price, "add_medicine command");

    let draft = MedicineDraft::parse(name, quantity, price)?;
    let id = db.inner().medicines().create(&draft).await?;

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        id = id,
        name = %draft.name(),
        "add_medicine complete"
    );

    Ok(draft.into_medicine(id))
}

/// Lists every medicine in insertion order.
pub async fn list_medicines(db: &DbState) -> Result<Vec<Medicine>, ApiError> {
    let start = Instant::now();
    let medicines = db.inner().medicines().list_all().await?;

    debug!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        count = medicines.len(),
        "list_medicines complete"
    );

    Ok(medicines)
}

/// Searches medicines by case-insensitive name substring.
///
/// A blank query returns every medicine.
pub async fn search_medicines(db: &DbState, query: &str) -> Result<Vec<Medicine>, ApiError> {
    let start = Instant::now();
    let query = validate_search_query(query)?;

    debug!(query = %query, "search_medicines command");

    let medicines = db.inner().medicines().search(&query).await?;

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        count = medicines.len(),
        query = %query,
        "search_medicines complete"
    );

    Ok(medicines)
}

/// Gets a single medicine by id.
///
/// ## Returns
/// The medicine if found, or `ApiError` with `NotFound`.
pub async fn get_medicine(db: &DbState, id: i64) -> Result<Medicine, ApiError> {
    debug!(id = id, "get_medicine command");
    db.inner()
        .medicines()
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Medicine", id))
}

/// Replaces all three fields of an existing medicine.
///
/// Uses the same validation as [`add_medicine`]. The id never changes.
pub async fn update_medicine(
    db: &DbState,
    id: i64,
    name: &str,
    quantity: &str,
    price: &str,
) -> Result<Medicine, ApiError> {
    let start = Instant::now();
    debug!(id = id, name = %name, "update_medicine command");

    let draft = MedicineDraft::parse(name, quantity, price)?;
    db.inner().medicines().update(id, &draft).await?;

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        id = id,
        "update_medicine complete"
    );

    Ok(draft.into_medicine(id))
}

/// Deletes the given medicines.
///
/// Ids that no longer exist are skipped.
///
/// ## Returns
/// Number of rows actually removed.
pub async fn delete_medicines(db: &DbState, ids: &[i64]) -> Result<u64, ApiError> {
    let start = Instant::now();
    debug!(ids = ?ids, "delete_medicines command");

    let removed = db.inner().medicines().delete(ids).await?;

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        requested = ids.len(),
        removed = removed,
        "delete_medicines complete"
    );

    Ok(removed)
}

/// Sum of `quantity * price` over all medicines.
pub async fn get_total_value(db: &DbState) -> Result<f64, ApiError> {
    Ok(db.inner().medicines().total_value().await?)
}
