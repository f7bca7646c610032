//! # Medicine Repository
//!
//! Database operations for medicine stock records.
//!
//! ## Key Operations
//! - CRUD by integer id
//! - Substring search on name
//! - Total stock value aggregate
//!
//! ## Name Search
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How Name Search Works                                │
//! │                                                                         │
//! │  User types: "para"                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Escape LIKE wildcards: "50%" → "50\%"                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  name LIKE '%para%' ESCAPE '\'   (ASCII case-insensitive)              │
//! │       │                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │ 1 | Paracetamol 500mg | 100 | 2.50      │ ← MATCH                   │
//! │  │ 2 | Ibuprofen         |  40 | 3.10      │                           │
//! │  │ 3 | PARACETAMOL syrup |  12 | 5.00      │ ← MATCH                   │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Results in insertion order: [1, 3]                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use pharmacy_core::{Medicine, MedicineDraft};

/// Repository for medicine database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = MedicineRepository::new(pool);
///
/// let id = repo.create(&draft).await?;
/// let rows = repo.search("para").await?;
/// repo.delete(&[id]).await?;
/// ```
#[derive(Debug, Clone)]
pub struct MedicineRepository {
    pool: SqlitePool,
}

impl MedicineRepository {
    /// Creates a new MedicineRepository.
    pub fn new(pool: SqlitePool) -> Self {
        MedicineRepository { pool }
    }

    /// Inserts a new medicine and returns its store-assigned id.
    ///
    /// Ids come from SQLite `AUTOINCREMENT`: strictly increasing, never reused.
    pub async fn create(&self, draft: &MedicineDraft) -> DbResult<i64> {
        debug!(name = %draft.name(), "Inserting medicine");

        let result = sqlx::query(
            r#"
            INSERT INTO medicines (name, quantity, price)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(draft.name())
        .bind(draft.quantity())
        .bind(draft.price())
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, "Medicine inserted");
        Ok(id)
    }

    /// Lists every medicine in insertion order.
    pub async fn list_all(&self) -> DbResult<Vec<Medicine>> {
        let medicines = sqlx::query_as::<_, Medicine>(
            r#"
            SELECT id, name, quantity, price
            FROM medicines
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = medicines.len(), "Listed medicines");
        Ok(medicines)
    }

    /// Returns medicines whose name contains `query`, ignoring ASCII case.
    ///
    /// An empty or whitespace-only query returns everything. `%`, `_` and
    /// `\` in the query are matched literally.
    pub async fn search(&self, query: &str) -> DbResult<Vec<Medicine>> {
        let query = query.trim();

        debug!(query = %query, "Searching medicines");

        if query.is_empty() {
            return self.list_all().await;
        }

        let medicines = sqlx::query_as::<_, Medicine>(
            r#"
            SELECT id, name, quantity, price
            FROM medicines
            WHERE name LIKE ?1 ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(like_pattern(query))
        .fetch_all(&self.pool)
        .await?;

        debug!(count = medicines.len(), "Search returned medicines");
        Ok(medicines)
    }

    /// Gets a medicine by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Medicine))` - Medicine found
    /// * `Ok(None)` - No row with that id
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Medicine>> {
        let medicine = sqlx::query_as::<_, Medicine>(
            r#"
            SELECT id, name, quantity, price
            FROM medicines
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(medicine)
    }

    /// Overwrites name, quantity and price of an existing medicine.
    ///
    /// ## Returns
    /// * `Ok(())` - Update successful
    /// * `Err(DbError::NotFound)` - No row with that id; nothing changed
    pub async fn update(&self, id: i64, draft: &MedicineDraft) -> DbResult<()> {
        debug!(id, name = %draft.name(), "Updating medicine");

        let result = sqlx::query(
            r#"
            UPDATE medicines SET
                name = ?2,
                quantity = ?3,
                price = ?4
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(draft.name())
        .bind(draft.quantity())
        .bind(draft.price())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Medicine", id));
        }

        Ok(())
    }

    /// Deletes every listed id in one transaction.
    ///
    /// Ids with no matching row are skipped without error.
    ///
    /// ## Returns
    /// The number of rows actually removed.
    pub async fn delete(&self, ids: &[i64]) -> DbResult<u64> {
        if ids.is_empty() {
            debug!("Delete called with no ids");
            return Ok(0);
        }

        debug!(?ids, "Deleting medicines");

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        let mut removed = 0;
        for id in ids {
            let result = sqlx::query("DELETE FROM medicines WHERE id = ?1")
                .bind(*id)
                .execute(&mut *tx)
                .await?;
            removed += result.rows_affected();
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        debug!(requested = ids.len(), removed, "Medicines deleted");
        Ok(removed)
    }

    /// Sum of `quantity * price` over all rows; `0.0` when the table is empty.
    pub async fn total_value(&self) -> DbResult<f64> {
        let total: f64 = sqlx::query_scalar(
            "SELECT CAST(COALESCE(SUM(quantity * price), 0.0) AS REAL) FROM medicines",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }

    /// Counts total medicines (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM medicines")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Builds a `%query%` LIKE pattern with wildcards escaped by `\`.
fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};

    async fn repo() -> MedicineRepository {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.medicines()
    }

    fn draft(name: &str, quantity: i64, price: f64) -> MedicineDraft {
        MedicineDraft::new(name, quantity, price).unwrap()
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("para"), "%para%");
        assert_eq!(like_pattern("50%"), "%50\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("c:\\"), "%c:\\\\%");
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let repo = repo().await;

        let id = repo.create(&draft("Paracetamol", 100, 2.5)).await.unwrap();

        let rows = repo.list_all().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0],
            Medicine {
                id,
                name: "Paracetamol".to_string(),
                quantity: 100,
                price: 2.5,
            }
        );
        assert!((repo.total_value().await.unwrap() - 250.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_ids_are_unique_and_increasing() {
        let repo = repo().await;

        let a = repo.create(&draft("A", 1, 1.0)).await.unwrap();
        let b = repo.create(&draft("B", 1, 1.0)).await.unwrap();
        assert!(b > a);

        // A deleted id is never handed out again
        repo.delete(&[b]).await.unwrap();
        let c = repo.create(&draft("C", 1, 1.0)).await.unwrap();
        assert!(c > b);

        let ids: Vec<i64> = repo.list_all().await.unwrap().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[tokio::test]
    async fn test_update_existing() {
        let repo = repo().await;
        let id = repo.create(&draft("Aspirin", 10, 1.0)).await.unwrap();

        repo.update(id, &draft("Aspirin 300mg", 12, 1.2))
            .await
            .unwrap();

        let medicine = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(medicine.name, "Aspirin 300mg");
        assert_eq!(medicine.quantity, 12);
        assert_eq!(medicine.price, 1.2);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = repo().await;
        let id = repo.create(&draft("Aspirin", 10, 1.0)).await.unwrap();
        let before = repo.list_all().await.unwrap();

        let err = repo
            .update(id + 100, &draft("Ghost", 1, 1.0))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));

        assert_eq!(repo.list_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_update_with_identical_values_succeeds() {
        let repo = repo().await;
        let same = draft("Aspirin", 10, 1.0);
        let id = repo.create(&same).await.unwrap();

        assert!(repo.update(id, &same).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_exact_row() {
        let repo = repo().await;
        let a = repo.create(&draft("A", 1, 1.0)).await.unwrap();
        let b = repo.create(&draft("B", 2, 2.0)).await.unwrap();

        assert_eq!(repo.delete(&[a]).await.unwrap(), 1);

        let rows = repo.list_all().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, b);
        assert!((repo.total_value().await.unwrap() - 4.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_delete_empty_and_missing_are_noops() {
        let repo = repo().await;
        let a = repo.create(&draft("A", 1, 1.0)).await.unwrap();

        assert_eq!(repo.delete(&[]).await.unwrap(), 0);
        assert_eq!(repo.delete(&[a + 50]).await.unwrap(), 0);
        assert_eq!(repo.count().await.unwrap(), 1);

        // Mixed batch removes only what exists
        assert_eq!(repo.delete(&[a, a + 50, a]).await.unwrap(), 1);
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_search_empty_matches_list_all() {
        let repo = repo().await;
        repo.create(&draft("Paracetamol", 1, 1.0)).await.unwrap();
        repo.create(&draft("Ibuprofen", 1, 1.0)).await.unwrap();

        assert_eq!(repo.search("").await.unwrap(), repo.list_all().await.unwrap());
        assert_eq!(
            repo.search("   ").await.unwrap(),
            repo.list_all().await.unwrap()
        );
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_containment() {
        let repo = repo().await;
        let p1 = repo.create(&draft("Paracetamol 500mg", 1, 1.0)).await.unwrap();
        repo.create(&draft("Ibuprofen", 1, 1.0)).await.unwrap();
        let p2 = repo.create(&draft("Junior PARACETAMOL", 1, 1.0)).await.unwrap();

        let ids: Vec<i64> = repo
            .search("cetaMOL")
            .await
            .unwrap()
            .iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec![p1, p2]);

        assert!(repo.search("aspirin").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_matches_wildcards_literally() {
        let repo = repo().await;
        let percent = repo.create(&draft("Glucose 50%", 1, 1.0)).await.unwrap();
        repo.create(&draft("Glucose 500", 1, 1.0)).await.unwrap();
        let underscore = repo.create(&draft("Vit_C", 1, 1.0)).await.unwrap();
        repo.create(&draft("VitaC", 1, 1.0)).await.unwrap();

        let found = repo.search("50%").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, percent);

        let found = repo.search("t_c").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, underscore);
    }

    #[tokio::test]
    async fn test_total_value() {
        let repo = repo().await;
        assert_eq!(repo.total_value().await.unwrap(), 0.0);

        repo.create(&draft("A", 1, 1.0)).await.unwrap();
        repo.create(&draft("B", 2, 2.0)).await.unwrap();
        repo.create(&draft("C", 0, 99.0)).await.unwrap();

        assert!((repo.total_value().await.unwrap() - 5.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_get_by_id_missing() {
        let repo = repo().await;
        assert!(repo.get_by_id(1).await.unwrap().is_none());
    }
}
