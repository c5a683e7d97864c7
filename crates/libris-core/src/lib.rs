//! # libris-core: Pure Domain Logic for Libris
//!
//! This crate holds the book inventory domain as plain data and pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Libris Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Interactive Shell (apps/cli)                   │   │
//! │  │    menu ──► prompts ──► parse fields ──► print outcome         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ libris-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────────┐   ┌─────────────┐   ┌─────────────────────┐  │   │
//! │  │   │   types     │   │ validation  │   │       error         │  │   │
//! │  │   │   Book      │   │ required    │   │  CoreError          │  │   │
//! │  │   │   NewBook   │   │ year/qty    │   │  ValidationError    │  │   │
//! │  │   │  BookUpdate │   │ parsing     │   │                     │  │   │
//! │  │   └─────────────┘   └─────────────┘   └─────────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO CONSOLE • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  libris-db (Database Layer)                     │   │
//! │  │            SQLite schema, pool, BookRepository                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Book, NewBook, BookUpdate)
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation and prompt value parsing
//!
//! ## Example Usage
//!
//! ```rust
//! use libris_core::validation::{parse_quantity, parse_year};
//! use libris_core::NewBook;
//!
//! let book = NewBook {
//!     title: "The Hobbit".to_string(),
//!     author: "J.R.R. Tolkien".to_string(),
//!     publisher: None,
//!     isbn: "978-0261102217".to_string(),
//!     pub_year: parse_year("1937").unwrap(),
//!     quantity: parse_quantity("").unwrap(),
//! };
//!
//! assert!(book.validate().is_ok());
//! assert_eq!(book.quantity, 0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Quantity recorded for a new book when none is given.
pub const DEFAULT_QUANTITY: i64 = 0;
