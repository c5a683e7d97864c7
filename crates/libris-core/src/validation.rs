//! # Validation Module
//!
//! Input validation and prompt-value parsing for Libris.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Shell prompts (apps/cli)                                     │
//! │  ├── Raw text lines from the console                                   │
//! │  └── THIS MODULE: parse year/quantity, blank → default                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Domain types (NewBook::validate)                             │
//! │  └── THIS MODULE: required fields, non-negative stock                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── UNIQUE(isbn)                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use libris_core::validation::{parse_quantity, parse_year, validate_isbn};
//!
//! validate_isbn("978-0261102217").unwrap();
//! assert_eq!(parse_year("1937").unwrap(), Some(1937));
//! assert_eq!(parse_quantity("").unwrap(), 0);
//! ```

use crate::error::ValidationError;
use crate::DEFAULT_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates that a text field is not blank.
///
/// ## Example
/// ```rust
/// use libris_core::validation::validate_required;
///
/// assert!(validate_required("title", "Dune").is_ok());
/// assert!(validate_required("title", "  ").is_err());
/// ```
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates an ISBN.
///
/// Any non-blank text is accepted; uniqueness is the store's job.
pub fn validate_isbn(isbn: &str) -> ValidationResult<()> {
    validate_required("isbn", isbn)
}

/// Turns a blank prompt answer into `None`.
pub fn optional_text(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        None
    } else {
        Some(input.to_string())
    }
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates that a count is zero or more.
pub fn validate_non_negative(field: &str, value: i64) -> ValidationResult<()> {
    if value < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Parses a publication year typed at a prompt.
///
/// ## Rules
/// - Blank → `None` (year unknown)
/// - Otherwise must be a whole number
pub fn parse_year(input: &str) -> ValidationResult<Option<i64>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    parse_integer("year", input).map(Some)
}

/// Parses a stock quantity typed at a prompt.
///
/// ## Rules
/// - Blank → [`DEFAULT_QUANTITY`]
/// - Must be a whole number
/// - Must not be negative
///
/// ## Example
/// ```rust
/// use libris_core::validation::parse_quantity;
///
/// assert_eq!(parse_quantity("3").unwrap(), 3);
/// assert!(parse_quantity("three").is_err());
/// assert!(parse_quantity("-1").is_err());
/// ```
pub fn parse_quantity(input: &str) -> ValidationResult<i64> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(DEFAULT_QUANTITY);
    }

    let quantity = parse_integer("quantity", input)?;
    validate_non_negative("quantity", quantity)?;
    Ok(quantity)
}

fn parse_integer(field: &str, input: &str) -> ValidationResult<i64> {
    input.parse::<i64>().map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: format!("'{}' is not a whole number", input),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required() {
        assert!(validate_required("title", "The Hobbit").is_ok());
        assert!(validate_required("title", "").is_err());
        assert!(validate_required("title", " \t ").is_err());
    }

    #[test]
    fn test_validate_isbn() {
        assert!(validate_isbn("978-0261102217").is_ok());
        assert!(validate_isbn("").is_err());
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(optional_text(""), None);
        assert_eq!(optional_text("   "), None);
        assert_eq!(optional_text(" Penguin "), Some("Penguin".to_string()));
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("1937").unwrap(), Some(1937));
        assert_eq!(parse_year(" 2001 ").unwrap(), Some(2001));
        assert_eq!(parse_year("").unwrap(), None);

        let err = parse_year("nineteen").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { ref field, .. } if field == "year"));
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("0").unwrap(), 0);
        assert_eq!(parse_quantity("12").unwrap(), 12);
        assert_eq!(parse_quantity("").unwrap(), DEFAULT_QUANTITY);

        assert!(matches!(
            parse_quantity("-2").unwrap_err(),
            ValidationError::MustBeNonNegative { .. }
        ));
        assert!(matches!(
            parse_quantity("2.5").unwrap_err(),
            ValidationError::InvalidFormat { .. }
        ));
    }
}
