//! Userbase configuration.

use std::env;
use std::str::FromStr;

use common::{DatabaseConfig, DEFAULT_DATABASE_URL};

/// Userbase configuration.
#[derive(Debug, Clone, Default)]
pub struct UserbaseConfig {
    /// Database connection settings
    pub database: DatabaseConfig,
}

impl UserbaseConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = DatabaseConfig::default();

        Self {
            database: DatabaseConfig {
                url: lookup("USERBASE_DATABASE_URL")
                    .or_else(|| lookup("DATABASE_URL"))
                    .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
                max_connections: parsed(&lookup, "USERBASE_MAX_CONNECTIONS")
                    .unwrap_or(defaults.max_connections),
                min_connections: parsed(&lookup, "USERBASE_MIN_CONNECTIONS")
                    .unwrap_or(defaults.min_connections),
                connect_timeout_secs: parsed(&lookup, "USERBASE_CONNECT_TIMEOUT_SECS")
                    .unwrap_or(defaults.connect_timeout_secs),
                auto_migrate: parsed(&lookup, "USERBASE_AUTO_MIGRATE")
                    .unwrap_or(defaults.auto_migrate),
            },
        }
    }

    /// Override the database URL (e.g. from a CLI flag).
    pub fn with_database_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.database.url = url;
        }
        self
    }
}

fn parsed<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "Ignoring unparsable setting");
            None
        }
    }
}
