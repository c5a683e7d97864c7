//! # Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`LIBRIS_DB_PATH`, `RUST_LOG`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after startup.

use libris_db::DbConfig;
use std::path::PathBuf;

/// Environment variable overriding the store file.
pub const DB_PATH_ENV: &str = "LIBRIS_DB_PATH";

/// Environment variable holding the log filter.
pub const LOG_FILTER_ENV: &str = "RUST_LOG";

/// Store file used when nothing else is configured.
pub const DEFAULT_DB_FILE: &str = "library.db";

/// Log filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite file backing the inventory.
    pub database_path: PathBuf,

    /// `tracing_subscriber::EnvFilter` directive string.
    pub log_filter: String,
}

impl Default for AppConfig {
    /// `./library.db`, warnings and errors only.
    fn default() -> Self {
        AppConfig {
            database_path: PathBuf::from(DEFAULT_DB_FILE),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Creates an AppConfig from environment variables and defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = AppConfig::default();
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(path) = non_blank(DB_PATH_ENV) {
            config.database_path = PathBuf::from(path);
        }

        if let Some(filter) = non_blank(LOG_FILTER_ENV) {
            config.log_filter = filter;
        }

        config
    }

    /// Database settings for the shell.
    ///
    /// The schema is ensured explicitly after connecting so a failure there
    /// can be logged without aborting startup.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database_path).run_migrations(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.database_path, PathBuf::from("library.db"));
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_env_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (DB_PATH_ENV, "/var/lib/libris/books.db"),
            (LOG_FILTER_ENV, "debug"),
        ]));
        assert_eq!(config.database_path, PathBuf::from("/var/lib/libris/books.db"));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = AppConfig::from_lookup(lookup_from(&[(DB_PATH_ENV, "  ")]));
        assert_eq!(config.database_path, PathBuf::from(DEFAULT_DB_FILE));
    }

    #[test]
    fn test_db_config_uses_path_and_defers_schema() {
        let config = AppConfig::from_lookup(lookup_from(&[(DB_PATH_ENV, "x.db")]));
        let db_config = config.db_config();
        assert_eq!(db_config.database_path, PathBuf::from("x.db"));
        assert!(!db_config.run_migrations);
    }
}
