//! # Validation Module
//!
//! Input validation for medicine records.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Terminal UI                                                  │
//! │  └── Empty-field check ("All fields are required!")                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── name: trimmed, non-empty, bounded length                          │
//! │  ├── quantity: whole number, >= 0                                      │
//! │  └── price: finite number, >= 0                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── CHECK (quantity >= 0), CHECK (price >= 0)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pharmacy_core::validation::{parse_price, parse_quantity};
//!
//! assert_eq!(parse_quantity(" 12 ").unwrap(), 12);
//! assert_eq!(parse_price("2.50").unwrap(), 2.5);
//! assert!(parse_quantity("twelve").is_err());
//! ```

use crate::error::ValidationError;
use crate::{MAX_NAME_LEN, MAX_QUERY_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a medicine name and returns it trimmed.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most [`MAX_NAME_LEN`] characters
///
/// ## Example
/// ```rust
/// use pharmacy_core::validation::validate_medicine_name;
///
/// assert_eq!(validate_medicine_name("  Ibuprofen ").unwrap(), "Ibuprofen");
/// assert!(validate_medicine_name("   ").is_err());
/// ```
pub fn validate_medicine_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (matches every record)
/// - Maximum [`MAX_QUERY_LEN`] characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a typed quantity.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::Negative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a typed price.
///
/// NaN and infinities are rejected along with negative values.
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::InvalidNumber {
            field: "price".to_string(),
            expected: "a finite number".to_string(),
            value: price.to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Parses quantity text from a form field.
///
/// ## Example
/// ```rust
/// use pharmacy_core::validation::parse_quantity;
///
/// assert_eq!(parse_quantity("100").unwrap(), 100);
/// assert!(parse_quantity("2.5").is_err());
/// assert!(parse_quantity("-1").is_err());
/// ```
pub fn parse_quantity(text: &str) -> ValidationResult<i64> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: "quantity".to_string(),
        });
    }

    let qty = text
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidNumber {
            field: "quantity".to_string(),
            expected: "a whole number".to_string(),
            value: text.to_string(),
        })?;

    validate_quantity(qty)?;
    Ok(qty)
}

/// Parses price text from a form field.
///
/// ## Example
/// ```rust
/// use pharmacy_core::validation::parse_price;
///
/// assert_eq!(parse_price("2.50").unwrap(), 2.5);
/// assert_eq!(parse_price("3").unwrap(), 3.0);
/// assert!(parse_price("abc").is_err());
/// assert!(parse_price("inf").is_err());
/// ```
pub fn parse_price(text: &str) -> ValidationResult<f64> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: "price".to_string(),
        });
    }

    let price = text
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidNumber {
            field: "price".to_string(),
            expected: "a number".to_string(),
            value: text.to_string(),
        })?;

    validate_price(price)?;

    // "-0" parses to negative zero
    Ok(if price == 0.0 { 0.0 } else { price })
}

// =============================================================================
// Unit Tests
// =============================================================================
