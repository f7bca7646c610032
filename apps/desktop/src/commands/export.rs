//! # Export Commands
//!
//! Writes a CSV snapshot of the whole inventory.
//!
//! ## File Format
//! ```text
//! ID,Name,Quantity,Price
//! 1,Paracetamol,100,2.5
//! 2,"Cough Syrup, 100ml",12,3.75
//! ```
//!
//! One header line, then one row per medicine in id order. Fields that
//! contain commas, quotes or newlines are quoted by the `csv` writer.
//! Exporting only reads from the store.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::DbState;
use pharmacy_core::Medicine;

/// Column names, in field order.
pub const EXPORT_HEADER: [&str; 4] = ["ID", "Name", "Quantity", "Price"];

/// Result of a finished export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    /// Where the file was written
    pub path: PathBuf,

    /// Number of data rows (header excluded)
    pub rows: usize,
}

/// Writes the header plus one row per medicine to any writer.
pub fn write_csv<W: Write>(writer: W, medicines: &[Medicine]) -> Result<(), ApiError> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv.write_record(EXPORT_HEADER)?;
    for medicine in medicines {
        csv.serialize(medicine)?;
    }

    csv.flush()
        .map_err(|e| ApiError::export(format!("Could not write file: {}", e)))?;
    Ok(())
}

/// Exports every medicine to `path`.
///
/// An existing file at `path` is overwritten.
pub async fn export_csv(db: &DbState, path: &Path) -> Result<ExportSummary, ApiError> {
    let start = Instant::now();
    debug!(path = %path.display(), "export_csv command");

    let medicines = db.inner().medicines().list_all().await?;

    let file = std::fs::File::create(path).map_err(|e| {
        tracing::warn!(path = %path.display(), error = %e, "Cannot create export file");
        ApiError::export(format!("Could not write {}: {}", path.display(), e))
    })?;
    write_csv(file, &medicines)?;

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        rows = medicines.len(),
        path = %path.display(),
        "export_csv complete"
    );

    Ok(ExportSummary {
        path: path.to_path_buf(),
        rows: medicines.len(),
    })
}

/// Suggested file name for an export made on `date`.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use pharmacy_desktop_lib::commands::export::default_export_path;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
/// assert_eq!(default_export_path(date), "medicines_20240309.csv");
/// ```
pub fn default_export_path(date: NaiveDate) -> String {
    format!("medicines_{}.csv", date.format("%Y%m%d"))
}

/// Turns the text typed in the export prompt into a destination.
///
/// Returns `None` for a blank entry (export cancelled). A path without an
/// extension gets `.csv` appended.
pub fn normalize_export_path(input: &str) -> Option<PathBuf> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let mut path = PathBuf::from(input);
    if path.extension().is_none() {
        path.set_extension("csv");
    }
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::medicine::{add_medicine, get_total_value};
    use crate::error::ErrorCode;
    use pharmacy_db::{Database, DbConfig};

    async fn test_db() -> DbState {
        let db = Database::new(DbConfig::in_memory())
            .await
            .expect("in-memory database");
        DbState::new(db)
    }

    #[test]
    fn test_write_csv_quotes_commas() {
        let medicines = vec![Medicine {
            id: 7,
            name: "Cough Syrup, 100ml".to_string(),
            quantity: 12,
            price: 3.75,
        }];

        let mut out = Vec::new();
        write_csv(&mut out, &medicines).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines, vec!["ID,Name,Quantity,Price", "7,\"Cough Syrup, 100ml\",12,3.75"]);
    }

    #[test]
    fn test_write_csv_empty_has_header_only() {
        let mut out = Vec::new();
        write_csv(&mut out, &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    }

    #[tokio::test]
    async fn test_export_two_rows() {
        let db = test_db().await;
        add_medicine(&db, "A", "1", "1.0").await.unwrap();
        add_medicine(&db, "B", "2", "2.0").await.unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stock.csv");

        let summary = export_csv(&db, &path).await.unwrap();
        assert_eq!(summary.rows, 2);

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "ID,Name,Quantity,Price");

        let second: Vec<&str> = lines[2].split(',').collect();
        assert_eq!(second[1], "B");
        assert_eq!(second[2], "2");
        assert_eq!(second[3].parse::<f64>().unwrap(), 2.0);

        // Export is read-only
        assert_eq!(get_total_value(&db).await.unwrap(), 5.0);
    }

    #[tokio::test]
    async fn test_export_to_missing_directory_fails() {
        let db = test_db().await;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("stock.csv");

        let err = export_csv(&db, &path).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ExportError);
    }

    #[test]
    fn test_normalize_export_path() {
        assert_eq!(normalize_export_path("   "), None);
        assert_eq!(
            normalize_export_path("backup"),
            Some(PathBuf::from("backup.csv"))
        );
        assert_eq!(
            normalize_export_path(" report.txt "),
            Some(PathBuf::from("report.txt"))
        );
    }
}
