//! # Schema Initializer
//!
//! Embedded SQL migrations for Libris.
//!
//! ## How Initialization Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Initialization Process                             │
//! │                                                                         │
//! │  Shell startup                                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Check _sqlx_migrations table                                          │
//! │       │                                                                 │
//! │       ├── Table doesn't exist? Create it                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  001_create_books.sql                                                  │
//! │       ├── applied already?  → skip                                     │
//! │       └── pending?          → CREATE TABLE IF NOT EXISTS books         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Shell continues startup                                               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Running it any number of times leaves the store in the same state.
//! **NEVER** modify an existing migration file: add a new one instead.

use sqlx::SqlitePool;
use tracing::info;

use crate::error::DbResult;

/// Embedded migrations from the workspace `migrations/sqlite` directory.
///
/// The `sqlx::migrate!()` macro embeds the SQL files into the binary at
/// compile time. No runtime file access needed.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Ensures the books table exists.
///
/// ## Safety
/// - Idempotent: safe to run multiple times
/// - Transactional: each migration runs in a transaction
pub async fn ensure_schema(pool: &SqlitePool) -> DbResult<()> {
    info!("Checking for pending migrations");

    MIGRATOR.run(pool).await?;

    info!("Schema is up to date");
    Ok(())
}

/// Returns information about migrations.
///
/// ## Returns
/// Tuple of (embedded_migrations, applied_migrations)
pub async fn schema_status(pool: &SqlitePool) -> DbResult<(usize, usize)> {
    let total = MIGRATOR.migrations.len();

    let applied: i64 = match sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
        .fetch_one(pool)
        .await
    {
        Ok(count) => count,
        // Bookkeeping table is missing until the first run
        Err(sqlx::Error::Database(err)) if err.message().contains("no such table") => 0,
        Err(err) => return Err(err.into()),
    };

    Ok((total, applied as usize))
}
