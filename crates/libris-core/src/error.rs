//! # Error Types
//!
//! Domain-specific error types for libris-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  libris-core errors (this file)                                        │
//! │  ├── CoreError        - Business rule violations (stock bounds)        │
//! │  └── ValidationError  - Input validation / format failures             │
//! │                                                                         │
//! │  libris-db errors (separate crate)                                     │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  libris-cli errors (in app)                                            │
//! │  └── ShellError       - What the prompt loop reports                   │
//! │                                                                         │
//! │  Flow: ValidationError ───────────────────► ShellError → console       │
//! │        CoreError → DbError ───────────────► ShellError → console       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule violations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No copies left to lend.
    ///
    /// ## When This Occurs
    /// ```text
    /// Borrow (isbn: 978-...)
    ///      │
    ///      ▼
    /// quantity == 0
    ///      │
    ///      ▼
    /// OutOfStock { isbn }   ← quantity stays 0, never goes negative
    /// ```
    #[error("Book {isbn} is out of stock")]
    OutOfStock { isbn: String },

    /// Stock is already at the largest count the store can hold, so a
    /// return cannot be recorded.
    #[error("Book {isbn} cannot take any more copies")]
    StockAtLimit { isbn: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// They are raised before anything reaches the database.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g., a year that is not a number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::OutOfStock {
            isbn: "978-0261102217".to_string(),
        };
        assert_eq!(err.to_string(), "Book 978-0261102217 is out of stock");

        let err = CoreError::StockAtLimit {
            isbn: "978-0261102217".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Book 978-0261102217 cannot take any more copies"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "title".to_string(),
        };
        assert_eq!(err.to_string(), "title is required");

        let err = ValidationError::InvalidFormat {
            field: "year".to_string(),
            reason: "must be a whole number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "year has invalid format: must be a whole number"
        );
    }
}
