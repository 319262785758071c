//! Activity input record and its format errors.
//!
//! # Responsibility
//! - Carry one categorized activity quantity (`Source`, `Amount` row).
//! - Reject malformed records with a single error family.
//!
//! # Invariants
//! - `quantity` is finite once `validate()` succeeds.
//! - Negative quantities are accepted; no domain sign check is performed.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One categorized activity quantity, e.g. `("Electricity (kWh)", 1000.0)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Activity category, matched exactly against the emission factor table.
    pub category: String,
    /// Quantity in the category's own unit.
    pub quantity: f64,
}

impl ActivityRecord {
    pub fn new(category: impl Into<String>, quantity: f64) -> Self {
        Self {
            category: category.into(),
            quantity,
        }
    }

    /// Validates record shape. `row` is the 1-based position used in errors.
    pub fn validate(&self, row: usize) -> Result<(), DataFormatError> {
        if self.category.is_empty() {
            return Err(DataFormatError::MissingCategory { row });
        }
        if !self.quantity.is_finite() {
            return Err(DataFormatError::NonFiniteQuantity { row });
        }
        Ok(())
    }
}

/// Malformed or missing input fields.
///
/// Any variant aborts the whole calculation; no partial result is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataFormatError {
    /// Required column absent from the tabular header.
    MissingColumn(&'static str),
    MissingCategory { row: usize },
    MissingQuantity { row: usize },
    InvalidQuantity { row: usize, value: String },
    NonFiniteQuantity { row: usize },
    /// Input could not be read or tokenized at all.
    Unreadable(String),
}

impl Display for DataFormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingColumn(name) => write!(f, "input is missing required column `{name}`"),
            Self::MissingCategory { row } => write!(f, "row {row}: category must not be empty"),
            Self::MissingQuantity { row } => write!(f, "row {row}: quantity is missing"),
            Self::InvalidQuantity { row, value } => {
                write!(f, "row {row}: quantity `{value}` is not a number")
            }
            Self::NonFiniteQuantity { row } => write!(f, "row {row}: quantity must be finite"),
            Self::Unreadable(message) => write!(f, "input could not be read: {message}"),
        }
    }
}

impl Error for DataFormatError {}

#[cfg(test)]
mod tests {
    use super::{ActivityRecord, DataFormatError};

    #[test]
    fn negative_quantity_is_accepted() {
        let record = ActivityRecord::new("Diesel (liters)", -12.5);
        assert!(record.validate(1).is_ok());
    }

    #[test]
    fn empty_category_is_rejected_with_row() {
        let record = ActivityRecord::new("", 10.0);
        assert_eq!(
            record.validate(4).unwrap_err(),
            DataFormatError::MissingCategory { row: 4 }
        );
    }

    #[test]
    fn nan_and_infinite_quantities_are_rejected() {
        for quantity in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = ActivityRecord::new("Petrol (liters)", quantity)
                .validate(2)
                .unwrap_err();
            assert_eq!(err, DataFormatError::NonFiniteQuantity { row: 2 });
        }
    }
}
