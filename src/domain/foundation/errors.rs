//! Error types for the domain layer.

use thiserror::Error;

/// Errors raised while turning raw form text into domain values.
///
/// The display strings are what the form shows next to the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("This field is required.")]
    Required { field: String },

    #[error("Enter a number.")]
    NotANumber { field: String },
}

impl ValidationError {
    /// Creates a missing-value validation error.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    /// Creates a non-numeric validation error.
    pub fn not_a_number(field: impl Into<String>) -> Self {
        ValidationError::NotANumber {
            field: field.into(),
        }
    }

    /// Name of the field the error belongs to.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field } | ValidationError::NotANumber { field } => field,
        }
    }
}
