//! Request validation applied before any store call.
//!
//! The HTTP layer type-checks payloads at the extractor (malformed JSON and
//! non-numeric amounts never get this far); this module adds the semantic
//! checks and hands the handlers an already-valid argument set.

use serde::Deserialize;
use thiserror::Error;

/// Incoming expense payload, exactly as supplied by the client.
#[derive(Clone, Debug, Deserialize)]
pub struct ExpenseRequest {
    pub category: String,
    pub amount: f64,
    pub description: String,
}

/// An expense payload that passed validation.
#[derive(Clone, Debug)]
pub struct ValidExpense {
    pub category: String,
    pub amount: f64,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ValidationError {
    #[error("category must not be empty")]
    EmptyCategory,

    #[error("amount must be a finite number, got {0}")]
    NonFiniteAmount(f64),
}

impl ExpenseRequest {
    /// Check the payload, returning the typed argument set for the store.
    pub fn validate(self) -> Result<ValidExpense, ValidationError> {
        if self.category.trim().is_empty() {
            return Err(ValidationError::EmptyCategory);
        }
        if !self.amount.is_finite() {
            return Err(ValidationError::NonFiniteAmount(self.amount));
        }
        Ok(ValidExpense {
            category: self.category,
            amount: self.amount,
            description: self.description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(category: &str, amount: f64) -> ExpenseRequest {
        ExpenseRequest {
            category: category.into(),
            amount,
            description: "x".into(),
        }
    }

    #[test]
    fn accepts_ordinary_payload() {
        let valid = request("Groceries", 45.2).validate().unwrap();
        assert_eq!(valid.category, "Groceries");
        assert_eq!(valid.amount, 45.2);
    }

    #[test]
    fn accepts_zero_and_negative_amounts() {
        assert!(request("Refund", 0.0).validate().is_ok());
        assert!(request("Refund", -12.5).validate().is_ok());
    }

    #[test]
    fn rejects_empty_category() {
        assert_eq!(
            request("", 1.0).validate().unwrap_err(),
            ValidationError::EmptyCategory
        );
        assert_eq!(
            request("   ", 1.0).validate().unwrap_err(),
            ValidationError::EmptyCategory
        );
    }

    #[test]
    fn rejects_non_finite_amounts() {
        assert!(matches!(
            request("Food", f64::NAN).validate().unwrap_err(),
            ValidationError::NonFiniteAmount(_)
        ));
        assert!(matches!(
            request("Food", f64::INFINITY).validate().unwrap_err(),
            ValidationError::NonFiniteAmount(_)
        ));
    }
}
