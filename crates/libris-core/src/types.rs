//! # Domain Types
//!
//! Core domain types used throughout Libris.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Book       │   │     NewBook     │   │   BookUpdate    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (rowid)     │   │  title          │   │  title          │       │
//! │  │  isbn (natural) │   │  author         │   │  author         │       │
//! │  │  title, author  │   │  publisher?     │   │  publisher?     │       │
//! │  │  publisher?     │   │  isbn           │   │  pub_year?      │       │
//! │  │  pub_year?      │   │  pub_year?      │   │                 │       │
//! │  │  quantity       │   │  quantity       │   │  (isbn, qty     │       │
//! │  └─────────────────┘   └─────────────────┘   │   untouched)    │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every book has:
//! - `id`: integer assigned by the store, immutable
//! - `isbn`: natural key, used by every lookup and mutation after creation

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::validation::{validate_isbn, validate_non_negative, validate_required, ValidationResult};

// =============================================================================
// Book
// =============================================================================

/// A book record as stored in the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Book {
    /// Surrogate identifier assigned on insert.
    pub id: i64,

    pub title: String,

    pub author: String,

    pub publisher: Option<String>,

    /// Globally unique natural key.
    pub isbn: String,

    /// Publication year, if known.
    pub pub_year: Option<i64>,

    /// Copies currently available for lending.
    pub quantity: i64,
}

impl Book {
    /// Whether at least one copy can be lent out.
    #[inline]
    pub fn is_available(&self) -> bool {
        self.quantity > 0
    }

    /// Checks the lending precondition.
    ///
    /// ## Returns
    /// * `Ok(())` - at least one copy is on the shelf
    /// * `Err(CoreError::OutOfStock)` - quantity is zero
    pub fn ensure_lendable(&self) -> CoreResult<()> {
        if self.is_available() {
            Ok(())
        } else {
            Err(CoreError::OutOfStock {
                isbn: self.isbn.clone(),
            })
        }
    }

    /// Returns the four overwritable fields as an update payload.
    ///
    /// The shell starts from this and replaces whatever the user typed.
    pub fn as_update(&self) -> BookUpdate {
        BookUpdate {
            title: self.title.clone(),
            author: self.author.clone(),
            publisher: self.publisher.clone(),
            pub_year: self.pub_year,
        }
    }
}

// =============================================================================
// New Book
// =============================================================================

/// Fields of a book about to be added. The store assigns the `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub publisher: Option<String>,
    pub isbn: String,
    pub pub_year: Option<i64>,
    pub quantity: i64,
}

impl NewBook {
    /// Validates the record before insertion.
    ///
    /// ## Rules
    /// - title, author and isbn must not be blank
    /// - quantity must not be negative
    pub fn validate(&self) -> ValidationResult<()> {
        validate_required("title", &self.title)?;
        validate_required("author", &self.author)?;
        validate_isbn(&self.isbn)?;
        validate_non_negative("quantity", self.quantity)?;
        Ok(())
    }
}

// =============================================================================
// Book Update
// =============================================================================

/// Replacement values for a book's descriptive fields.
///
/// An update always overwrites all four fields; ISBN and quantity are never
/// touched by it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookUpdate {
    pub title: String,
    pub author: String,
    pub publisher: Option<String>,
    pub pub_year: Option<i64>,
}

impl BookUpdate {
    /// Validates the update payload.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_required("title", &self.title)?;
        validate_required("author", &self.author)?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn hobbit(quantity: i64) -> Book {
        Book {
            id: 1,
            title: "The Hobbit".to_string(),
            author: "J.R.R. Tolkien".to_string(),
            publisher: Some("Allen & Unwin".to_string()),
            isbn: "978-0261102217".to_string(),
            pub_year: Some(1937),
            quantity,
        }
    }

    #[test]
    fn test_availability() {
        assert!(hobbit(1).is_available());
        assert!(!hobbit(0).is_available());
    }

    #[test]
    fn test_ensure_lendable() {
        assert!(hobbit(3).ensure_lendable().is_ok());

        let err = hobbit(0).ensure_lendable().unwrap_err();
        assert!(matches!(err, CoreError::OutOfStock { ref isbn } if isbn == "978-0261102217"));
    }

    #[test]
    fn test_as_update_copies_descriptive_fields() {
        let update = hobbit(2).as_update();
        assert_eq!(update.title, "The Hobbit");
        assert_eq!(update.author, "J.R.R. Tolkien");
        assert_eq!(update.publisher.as_deref(), Some("Allen & Unwin"));
        assert_eq!(update.pub_year, Some(1937));
    }

    #[test]
    fn test_new_book_validation() {
        let mut book = NewBook {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            publisher: None,
            isbn: "978-0441013593".to_string(),
            pub_year: None,
            quantity: 0,
        };
        assert!(book.validate().is_ok());

        book.quantity = -1;
        assert!(book.validate().is_err());

        book.quantity = 1;
        book.title = "   ".to_string();
        assert!(book.validate().is_err());
    }

    #[test]
    fn test_update_validation() {
        let mut update = hobbit(0).as_update();
        assert!(update.validate().is_ok());

        update.author.clear();
        assert!(update.validate().is_err());
    }
}
