//! # Repository Module
//!
//! Database repository implementations for Libris.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  Shell menu action                                                     │
//! │       │                                                                 │
//! │       │  db.books().borrow("978-0261102217")                           │
//! │       ▼                                                                 │
//! │  BookRepository                                                        │
//! │  ├── add / list_all / search                                           │
//! │  ├── update_fields                                                     │
//! │  ├── borrow / return_copy                                              │
//! │  └── delete                                                            │
//! │       │                                                                 │
//! │       │  One parameterized statement per step                          │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`BookRepository`](book::BookRepository) - Book CRUD, search and stock

pub mod book;
