//! Database connection configuration.

use serde::Deserialize;
use std::time::Duration;

use super::duration;
use super::error::FieldError;

/// The only driver the service ships with.
pub const MYSQL_DRIVER: &str = "mysql";

pub const DEFAULT_MAX_OPEN_CONNS: i64 = 10;
pub const DEFAULT_MAX_IDLE_CONNS: i64 = 20;
pub const DEFAULT_CONN_MAX_LIFETIME: Duration = Duration::from_secs(30);

/// Database connection settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Driver name, must be "mysql".
    pub driver: String,
    pub username: String,
    /// May be empty for passwordless accounts.
    pub password: String,
    /// Host and port of the server (e.g., "localhost:3306").
    pub address: String,
    pub database_name: String,
    /// Upper bound of open connections in the pool (default: 10).
    pub max_open_conns: Option<i64>,
    /// Upper bound of idle connections kept in the pool (default: 20).
    pub max_idle_conns: Option<i64>,
    /// Maximum time a connection may be reused (default: 30s).
    #[serde(deserialize_with = "duration::deserialize")]
    pub conn_max_lifetime: Option<Duration>,
}

impl DatabaseConfig {
    pub fn apply_defaults(&mut self) {
        self.max_open_conns.get_or_insert(DEFAULT_MAX_OPEN_CONNS);
        self.max_idle_conns.get_or_insert(DEFAULT_MAX_IDLE_CONNS);
        self.conn_max_lifetime.get_or_insert(DEFAULT_CONN_MAX_LIFETIME);
    }

    pub fn max_open_conns(&self) -> i64 {
        self.max_open_conns.unwrap_or(DEFAULT_MAX_OPEN_CONNS)
    }

    pub fn max_idle_conns(&self) -> i64 {
        self.max_idle_conns.unwrap_or(DEFAULT_MAX_IDLE_CONNS)
    }

    pub fn conn_max_lifetime(&self) -> Duration {
        self.conn_max_lifetime.unwrap_or(DEFAULT_CONN_MAX_LIFETIME)
    }

    /// All failing checks, in check order.
    pub fn violations(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.driver != MYSQL_DRIVER {
            errors.push(FieldError::Invalid("driver"));
        }
        for (name, value) in [
            ("username", &self.username),
            ("address", &self.address),
            ("database_name", &self.database_name),
        ] {
            if value.is_empty() {
                errors.push(FieldError::Missing(name));
            }
        }
        errors
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        match self.violations().into_iter().next() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
