//! # Domain Types
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐            ┌─────────────────────┐            │
//! │  │   MedicineDraft     │  insert    │      Medicine       │            │
//! │  │  ─────────────────  │ ─────────► │  ─────────────────  │            │
//! │  │  name (validated)   │  (store    │  id (assigned)      │            │
//! │  │  quantity >= 0      │  assigns   │  name               │            │
//! │  │  price >= 0         │  the id)   │  quantity           │            │
//! │  └─────────────────────┘            │  price              │            │
//! │                                     └─────────────────────┘            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A `MedicineDraft` is the only thing the store accepts for writes. Its
//! fields are private and every constructor validates, so an invalid row
//! cannot be expressed.

use serde::{Deserialize, Serialize};

use crate::validation::{
    parse_price, parse_quantity, validate_medicine_name, validate_price, validate_quantity,
    ValidationResult,
};

// =============================================================================
// Medicine
// =============================================================================

/// A persisted medicine stock entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Medicine {
    /// Store-assigned identifier. Never reused, never changes.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Units in stock.
    pub quantity: i64,

    /// Unit price.
    pub price: f64,
}

impl Medicine {
    /// Value of this line of stock (`quantity * price`).
    #[inline]
    pub fn stock_value(&self) -> f64 {
        self.quantity as f64 * self.price
    }

    /// Re-validates the editable fields as a draft.
    ///
    /// Fields are public, so a `Medicine` built by hand may hold values the
    /// store would reject.
    pub fn to_draft(&self) -> ValidationResult<MedicineDraft> {
        MedicineDraft::new(&self.name, self.quantity, self.price)
    }
}

// =============================================================================
// Medicine Draft
// =============================================================================

/// Validated input for creating or updating a medicine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MedicineDraft {
    name: String,
    quantity: i64,
    price: f64,
}

impl MedicineDraft {
    /// Builds a draft from typed values.
    ///
    /// ## Example
    /// ```rust
    /// use pharmacy_core::MedicineDraft;
    ///
    /// assert!(MedicineDraft::new("Cetirizine", 30, 1.25).is_ok());
    /// assert!(MedicineDraft::new("", 30, 1.25).is_err());
    /// assert!(MedicineDraft::new("Cetirizine", -1, 1.25).is_err());
    /// ```
    pub fn new(name: &str, quantity: i64, price: f64) -> ValidationResult<Self> {
        let name = validate_medicine_name(name)?;
        validate_quantity(quantity)?;
        validate_price(price)?;

        Ok(MedicineDraft {
            name,
            quantity,
            price,
        })
    }

    /// Builds a draft from raw form text.
    ///
    /// Fields are checked in form order (name, quantity, price) and the
    /// first failure is returned.
    pub fn parse(name: &str, quantity: &str, price: &str) -> ValidationResult<Self> {
        let name = validate_medicine_name(name)?;
        let quantity = parse_quantity(quantity)?;
        let price = parse_price(price)?;

        Ok(MedicineDraft {
            name,
            quantity,
            price,
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    #[inline]
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Value of this line of stock (`quantity * price`).
    #[inline]
    pub fn stock_value(&self) -> f64 {
        self.quantity as f64 * self.price
    }

    /// Attaches a store-assigned id.
    pub fn into_medicine(self, id: i64) -> Medicine {
        Medicine {
            id,
            name: self.name,
            quantity: self.quantity,
            price: self.price,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidationError;

    #[test]
    fn test_parse_trims_name() {
        let draft = MedicineDraft::parse("  Amoxicillin ", "20", "4.75").unwrap();
        assert_eq!(draft.name(), "Amoxicillin");
        assert_eq!(draft.quantity(), 20);
        assert_eq!(draft.price(), 4.75);
    }

    #[test]
    fn test_parse_reports_first_bad_field() {
        let err = MedicineDraft::parse("", "x", "y").unwrap_err();
        assert_eq!(err.field(), "name");

        let err = MedicineDraft::parse("Aspirin", "x", "y").unwrap_err();
        assert_eq!(err.field(), "quantity");

        let err = MedicineDraft::parse("Aspirin", "3", "y").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidNumber { ref field, .. } if field == "price"));
    }

    #[test]
    fn test_stock_value() {
        let medicine = MedicineDraft::new("Paracetamol", 100, 2.5)
            .unwrap()
            .into_medicine(1);
        assert_eq!(medicine.id, 1);
        assert_eq!(medicine.stock_value(), 250.0);
    }

    #[test]
    fn test_to_draft_round_trips_fields() {
        let medicine = Medicine {
            id: 9,
            name: "Ibuprofen".to_string(),
            quantity: 3,
            price: 1.5,
        };
        let draft = medicine.to_draft().unwrap();
        assert_eq!(draft.into_medicine(9), medicine);
    }

    #[test]
    fn test_to_draft_rejects_invalid_fields() {
        let blank = Medicine {
            id: 1,
            name: "   ".to_string(),
            quantity: 5,
            price: 1.0,
        };
        assert_eq!(blank.to_draft().unwrap_err().field(), "name");

        let nan_price = Medicine {
            id: 2,
            name: "Aspirin".to_string(),
            quantity: 5,
            price: f64::NAN,
        };
        assert_eq!(nan_price.to_draft().unwrap_err().field(), "price");

        let long_name = Medicine {
            id: 3,
            name: "x".repeat(crate::MAX_NAME_LEN + 1),
            quantity: 1,
            price: 1.0,
        };
        assert!(matches!(
            long_name.to_draft(),
            Err(ValidationError::TooLong { .. })
        ));
    }
}
