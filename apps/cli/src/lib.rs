//! # Libris CLI Library
//!
//! Core library for the Libris interactive shell.
//! `main.rs` only wires configuration, logging and the store together; the
//! loop itself lives here so tests can drive it with scripted input.
//!
//! ## Module Organization
//! ```text
//! libris_cli/
//! ├── lib.rs          ◄─── You are here (logging setup)
//! ├── config.rs       ◄─── Store path and log filter
//! ├── error.rs        ◄─── ShellError
//! ├── prompt.rs       ◄─── Console: prompts over BufRead/Write
//! ├── shell.rs        ◄─── Menu loop and dispatch
//! └── commands/
//!     ├── mod.rs      ◄─── Menu choices
//!     └── book.rs     ◄─── Add/list/search/borrow/return/update/delete flows
//! ```
//!
//! ## Shell States
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌──────────┐  1..7   ┌────────────┐  outcome  ┌──────────────────┐   │
//! │   │   Menu   │ ──────► │  Collect   │ ────────► │ "Press Enter..." │   │
//! │   │          │         │  & run op  │           │                  │   │
//! │   └──────────┘         └────────────┘           └────────┬─────────┘   │
//! │     ▲   │  │                                             │             │
//! │     │   │  └── other ──► "Invalid choice" ───────────────┤             │
//! │     │   │                                                │             │
//! │     │   └── 0 / end of input ──► exit                    │             │
//! │     └────────────────────────────────────────────────────┘             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod prompt;
pub mod shell;

use tracing_subscriber::EnvFilter;

pub use config::AppConfig;
pub use error::{ShellError, ShellResult};
pub use shell::Shell;

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never interleave with the menu on stdout.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every repository statement
/// - `RUST_LOG=libris_db=debug,sqlx=warn` - Repository only
/// - Default: WARN level
pub fn init_tracing(filter: &str) {
    let filter =
        EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
