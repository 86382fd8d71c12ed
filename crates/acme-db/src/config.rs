//! Startup configuration.
//!
//! Configuration is loaded from environment variables. Only `DATABASE_URL` is
//! required; everything else falls back to a default.
//!
//! | Variable                   | Default | Meaning                          |
//! |----------------------------|---------|----------------------------------|
//! | `DATABASE_URL`             | -       | Store connection string          |
//! | `DATABASE_MAX_CONNECTIONS` | `5`     | Pool size                        |
//! | `DATABASE_RUN_MIGRATIONS`  | `true`  | Create tables on connect         |

use serde::{Deserialize, Serialize};
use std::env;

use crate::pool::DbConfig;

const DATABASE_URL: &str = "DATABASE_URL";
const DATABASE_MAX_CONNECTIONS: &str = "DATABASE_MAX_CONNECTIONS";
const DATABASE_RUN_MIGRATIONS: &str = "DATABASE_RUN_MIGRATIONS";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Store connection string
    pub database_url: String,

    /// Maximum pool size
    pub max_connections: u32,

    /// Whether to run embedded migrations on connect
    pub run_migrations: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup(DATABASE_URL)
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingRequired(DATABASE_URL.to_string()))?;

        let max_connections = match lookup(DATABASE_MAX_CONNECTIONS) {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| ConfigError::InvalidValue(DATABASE_MAX_CONNECTIONS.to_string()))?,
            None => 5,
        };

        let run_migrations = match lookup(DATABASE_RUN_MIGRATIONS) {
            Some(raw) => raw
                .trim()
                .parse::<bool>()
                .map_err(|_| ConfigError::InvalidValue(DATABASE_RUN_MIGRATIONS.to_string()))?,
            None => true,
        };

        Ok(AppConfig {
            database_url,
            max_connections,
            run_migrations,
        })
    }

    /// Pool configuration derived from this configuration.
    pub fn db_config(&self) -> DbConfig {
        let config = DbConfig::new(self.database_url.clone());

        // An in-memory store lives only as long as its single connection
        if config.is_in_memory() {
            return DbConfig {
                database_url: self.database_url.clone(),
                ..DbConfig::in_memory()
            }
            .run_migrations(self.run_migrations);
        }

        config
            .max_connections(self.max_connections)
            .run_migrations(self.run_migrations)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "sqlite://acme.db")])).unwrap();

        assert_eq!(config.database_url, "sqlite://acme.db");
        assert_eq!(config.max_connections, 5);
        assert!(config.run_migrations);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("DATABASE_MAX_CONNECTIONS", "8"),
            ("DATABASE_RUN_MIGRATIONS", "false"),
        ]))
        .unwrap();
        assert_eq!(config.max_connections, 8);

        // in-memory stores are pinned to one connection
        let db_config = config.db_config();
        assert_eq!(db_config.max_connections, 1);
        assert!(!db_config.run_migrations);
        assert!(db_config.is_in_memory());

        let file = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite://acme.db"),
            ("DATABASE_MAX_CONNECTIONS", "8"),
        ]))
        .unwrap()
        .db_config();
        assert_eq!(file.max_connections, 8);
        assert!(file.run_migrations);
    }

    #[test]
    fn test_missing_url() {
        let result = AppConfig::from_lookup(lookup_from(&[]));
        assert!(matches!(result, Err(ConfigError::MissingRequired(key)) if key == "DATABASE_URL"));

        let result = AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "  ")]));
        assert!(matches!(result, Err(ConfigError::MissingRequired(_))));
    }

    #[test]
    fn test_invalid_values() {
        let result = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite://acme.db"),
            ("DATABASE_MAX_CONNECTIONS", "many"),
        ]));
        assert!(matches!(result, Err(ConfigError::InvalidValue(key)) if key == "DATABASE_MAX_CONNECTIONS"));

        let result = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite://acme.db"),
            ("DATABASE_MAX_CONNECTIONS", "0"),
        ]));
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));

        let result = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite://acme.db"),
            ("DATABASE_RUN_MIGRATIONS", "yes"),
        ]));
        assert!(matches!(result, Err(ConfigError::InvalidValue(key)) if key == "DATABASE_RUN_MIGRATIONS"));
    }
}
