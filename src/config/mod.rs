//! Configuration loading and validation for the service.
//!
//! The config file path comes from `APP_CONFIG_PATH`. The YAML document is
//! decoded with serde_yaml, `GIN_MODE`/`PORT` overrides are applied on top,
//! unset fields get their defaults and every section is validated before
//! the config is handed out.

mod database;
mod duration;
mod env;
mod error;
mod http;
mod log;

pub use database::{
    DEFAULT_CONN_MAX_LIFETIME, DEFAULT_MAX_IDLE_CONNS, DEFAULT_MAX_OPEN_CONNS, DatabaseConfig,
    MYSQL_DRIVER,
};
pub use env::{EnvSource, ProcessEnv};
pub use error::{ConfigError, DecodeError, FieldError, Section, ValidationError};
pub use http::{GinMode, HttpConfig, MAX_PORT, MIN_PORT};
pub use log::{DEFAULT_LOG_LEVEL, LogConfig};

use serde::Deserialize;
use std::{fs, path::Path};
use tracing::{debug, info, warn};

/// Environment variable holding the config file path.
pub const CONFIG_PATH_ENV: &str = "APP_CONFIG_PATH";
/// Overrides `http.gin_mode`.
pub const GIN_MODE_ENV: &str = "GIN_MODE";
/// Overrides `http.port`.
pub const PORT_ENV: &str = "PORT";

/// Root configuration structure.
///
/// Missing sections and keys decode to empty values; validation decides
/// which of them are actually required.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener settings.
    pub http: HttpConfig,
    /// Database connection settings.
    pub database: DatabaseConfig,
    /// Log output settings.
    pub log: LogConfig,
}

impl AppConfig {
    /// Load configuration from the path named by `APP_CONFIG_PATH` in the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(&ProcessEnv)
    }

    /// Load configuration from the path named by `APP_CONFIG_PATH` in `env`.
    ///
    /// Fails before touching the filesystem when the variable is unset or empty.
    pub fn resolve(env: &impl EnvSource) -> Result<Self, ConfigError> {
        let path = env
            .non_empty(CONFIG_PATH_ENV)
            .ok_or(ConfigError::MissingPath(CONFIG_PATH_ENV))?;

        Self::load(path, env)
    }

    /// Load, default and validate the YAML file at `path`.
    ///
    /// `GIN_MODE` and `PORT` from `env` take precedence over the file.
    pub fn load(path: impl AsRef<Path>, env: &impl EnvSource) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading configuration");

        let content = fs::read_to_string(path).map_err(|source| DecodeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: AppConfig = serde_yaml::from_str(&content).map_err(DecodeError::from)?;

        config.apply_env_overrides(env)?;
        config.apply_defaults();
        config.validate()?;

        info!(
            path = %path.display(),
            gin_mode = %config.http.gin_mode,
            port = config.http.port,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Decode a YAML document and apply defaults, without env overrides or validation.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: AppConfig = serde_yaml::from_str(yaml).map_err(DecodeError::from)?;
        config.apply_defaults();
        Ok(config)
    }

    /// Replace file values with `GIN_MODE` and `PORT` when they are set and non-empty.
    fn apply_env_overrides(&mut self, env: &impl EnvSource) -> Result<(), DecodeError> {
        if let Some(mode) = env.non_empty(GIN_MODE_ENV) {
            if !self.http.gin_mode.is_empty() && self.http.gin_mode != mode {
                warn!(file = %self.http.gin_mode, env = %mode, "GIN_MODE overrides http.gin_mode");
            }
            self.http.gin_mode = mode;
        }

        if let Some(value) = env.non_empty(PORT_ENV) {
            let port = value
                .trim()
                .parse::<i64>()
                .map_err(|_| DecodeError::EnvOverride {
                    name: PORT_ENV,
                    value: value.clone(),
                })?;
            if self.http.port != 0 && self.http.port != port {
                warn!(file = self.http.port, env = port, "PORT overrides http.port");
            }
            self.http.port = port;
        }

        Ok(())
    }

    /// Fill unset fields with their defaults. Fields that already hold a value,
    /// including an explicit zero or `false`, are left alone.
    pub fn apply_defaults(&mut self) {
        self.database.apply_defaults();
        self.log.apply_defaults();
    }

    /// Validate sections in order http, log, database and stop at the first violation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.http
            .validate()
            .map_err(|e| ValidationError::new(Section::Http, e))?;
        self.log
            .validate()
            .map_err(|e| ValidationError::new(Section::Log, e))?;
        self.database
            .validate()
            .map_err(|e| ValidationError::new(Section::Database, e))?;
        Ok(())
    }

    /// Every violation across all sections, in the same order `validate` checks them.
    pub fn validate_all(&self) -> Vec<ValidationError> {
        let sections = [
            (Section::Http, self.http.violations()),
            (Section::Log, self.log.violations()),
            (Section::Database, self.database.violations()),
        ];

        sections
            .into_iter()
            .flat_map(|(section, errors)| {
                errors
                    .into_iter()
                    .map(move |field| ValidationError::new(section, field))
            })
            .collect()
    }
}
