//! # API Error Type
//!
//! Unified error type for commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Stock Manager                      │
//! │                                                                         │
//! │  Command Function                                                      │
//! │  Result<T, ApiError>                                                   │
//! │         │                                                               │
//! │         ├── Bad form input?  ─── ValidationError ──┐                   │
//! │         │                                          │                   │
//! │         ├── Row gone?        ─── DbError::NotFound ┼──► ApiError        │
//! │         │                                          │        │          │
//! │         └── Can't write CSV? ─── csv / io error ───┘        │          │
//! │                                                             ▼          │
//! │                                          InventoryView shows a notice  │
//! │                                          (title from code + message)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here is fatal: the user reads the notice, fixes the input and
//! tries again.

use pharmacy_core::ValidationError;
use pharmacy_db::DbError;
use thiserror::Error;

/// Error returned from commands.
#[derive(Debug, Clone, Error)]
#[error("[{code:?}] {message}")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Medicine id does not exist
    NotFound,

    /// Form input failed validation
    ValidationError,

    /// Database operation failed
    DatabaseError,

    /// Export destination could not be written
    ExportError,
}

impl ErrorCode {
    /// Title for the notice dialog.
    pub fn title(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "Not Found",
            ErrorCode::ValidationError => "Invalid Input",
            ErrorCode::DatabaseError => "Database Error",
            ErrorCode::ExportError => "Export Failed",
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an export error.
    pub fn export(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ExportError, message)
    }

    pub fn is_validation(&self) -> bool {
        self.code == ErrorCode::ValidationError
    }

    pub fn is_not_found(&self) -> bool {
        self.code == ErrorCode::NotFound
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => ApiError::not_found(&entity, id),
            DbError::ConstraintViolation { message } => {
                tracing::warn!("Constraint violation: {}", message);
                ApiError::validation("Quantity and price cannot be negative.")
            }
            DbError::ConnectionFailed(_) => {
                ApiError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::MigrationFailed(_) => {
                ApiError::new(ErrorCode::DatabaseError, "Database migration failed")
            }
            DbError::QueryFailed(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Database query failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::TransactionFailed(e) => {
                tracing::error!("Transaction failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database transaction failed")
            }
            DbError::PoolExhausted => {
                ApiError::new(ErrorCode::DatabaseError, "Database pool exhausted")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

/// Validation failures keep the wording of the form they came from.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        let message = match &err {
            ValidationError::InvalidNumber { field, .. } if field == "quantity" => {
                "Quantity must be an integer.".to_string()
            }
            ValidationError::InvalidNumber { field, .. } if field == "price" => {
                "Price must be numeric.".to_string()
            }
            _ => {
                let text = err.to_string();
                let mut chars = text.chars();
                match chars.next() {
                    Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
                    None => text,
                }
            }
        };
        ApiError::validation(message)
    }
}

/// CSV writer failures (including the underlying I/O error).
impl From<csv::Error> for ApiError {
    fn from(err: csv::Error) -> Self {
        tracing::warn!("CSV export failed: {}", err);
        ApiError::export(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_not_found_maps_to_not_found() {
        let err: ApiError = DbError::not_found("Medicine", 3).into();
        assert!(err.is_not_found());
        assert_eq!(err.message, "Medicine not found: 3");
    }

    #[test]
    fn test_validation_messages() {
        let err: ApiError = ValidationError::Required {
            field: "name".to_string(),
        }
        .into();
        assert!(err.is_validation());
        assert_eq!(err.message, "Name is required.");

        let err: ApiError = ValidationError::InvalidNumber {
            field: "quantity".to_string(),
            expected: "a whole number".to_string(),
            value: "x".to_string(),
        }
        .into();
        assert_eq!(err.message, "Quantity must be an integer.");

        let err: ApiError = ValidationError::Negative {
            field: "price".to_string(),
        }
        .into();
        assert_eq!(err.message, "Price cannot be negative.");
    }

    #[test]
    fn test_db_internal_maps_to_database_error() {
        let err: ApiError = DbError::Internal("disk I/O error".to_string()).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.message, "Database operation failed");
    }

    #[test]
    fn test_display_includes_code() {
        let err = ApiError::export("disk full");
        assert_eq!(err.to_string(), "[ExportError] disk full");
        assert_eq!(err.code.title(), "Export Failed");
    }
}
