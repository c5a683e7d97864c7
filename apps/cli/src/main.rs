//! # Libris
//!
//! Interactive library inventory shell.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │ 1. Load AppConfig (LIBRIS_DB_PATH, RUST_LOG)                        │
//! │ 2. Initialize tracing (stderr)                                      │
//! │ 3. Open the store ──── failure ──► log, exit code 1                 │
//! │ 4. Ensure the books table ──── failure ──► log, keep going          │
//! │    then a health check (warning only)                               │
//! │ 5. Run the shell on stdin / stdout                                  │
//! │ 6. Close the pool                                                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::process::ExitCode;

use libris_cli::{init_tracing, AppConfig, Shell};
use libris_db::Database;
use tracing::{debug, error, info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = AppConfig::from_env();
    init_tracing(&config.log_filter);

    info!(path = %config.database_path.display(), "Starting Libris");

    let db = match Database::new(config.db_config()).await {
        Ok(db) => db,
        Err(err) => {
            error!(
                path = %config.database_path.display(),
                error = %err,
                "Could not open the book store"
            );
            return ExitCode::FAILURE;
        }
    };

    // Operations will report their own errors if the table is missing
    if let Err(err) = db.ensure_schema().await {
        error!(error = %err, "Could not initialize the books table");
    } else if let Ok((total, applied)) = db.schema_status().await {
        debug!(total, applied, "Schema ready");
    }

    if !db.health_check().await {
        warn!("Book store did not answer a health check");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(db.books(), stdin.lock(), stdout.lock());
    let outcome = shell.run().await;

    db.close().await;

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Console failure");
            ExitCode::FAILURE
        }
    }
}
