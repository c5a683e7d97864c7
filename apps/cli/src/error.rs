//! # Shell Error Type
//!
//! Unified error type for menu actions.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Shell                              │
//! │                                                                         │
//! │  Menu action                                                           │
//! │       │                                                                 │
//! │       ├── bad year / quantity / blank field ── ValidationError ──┐     │
//! │       ├── duplicate / not found / no stock ─── DbError ──────────┤     │
//! │       ├── store unreachable ────────────────── DbError ──────────┤     │
//! │       │                                                          ▼     │
//! │       │                                        ShellError → "Error: …" │
//! │       │                                        back to the menu        │
//! │       │                                                                 │
//! │       └── console closed / broken ──── InputClosed | Io → loop ends    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use libris_core::ValidationError;
use libris_db::DbError;
use std::io;
use thiserror::Error;

/// Errors raised while running a menu action.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Standard input reached end of file.
    #[error("Input closed")]
    InputClosed,

    /// Reading from or writing to the console failed.
    #[error("Console I/O failed: {0}")]
    Io(#[from] io::Error),

    /// A typed value was missing or malformed.
    #[error("Input error: {0}")]
    Input(#[from] ValidationError),

    /// The repository rejected the operation.
    #[error("{0}")]
    Db(#[from] DbError),
}

impl ShellError {
    /// Whether the loop can no longer talk to the user.
    pub fn ends_session(&self) -> bool {
        matches!(self, ShellError::InputClosed | ShellError::Io(_))
    }
}

/// Result type for shell actions.
pub type ShellResult<T> = Result<T, ShellError>;
