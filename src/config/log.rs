//! Log output configuration.

use serde::Deserialize;

use super::error::FieldError;

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log output and rotation settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Human-friendly output instead of the compact production format (default: true).
    pub dev_log_mode: Option<bool>,
    /// Logging verbosity: "trace", "debug", "info", "warn", "error" (default: "info").
    pub log_level: Option<String>,
    /// Log file path.
    pub filename: String,
    /// Maximum size in megabytes before the file is rotated.
    pub max_size: i64,
    /// Maximum number of rotated files to keep.
    pub max_backups: i64,
    /// Maximum number of days to keep rotated files.
    pub max_age: i64,
    /// Gzip rotated files.
    pub compress: bool,
}

impl LogConfig {
    pub fn apply_defaults(&mut self) {
        self.dev_log_mode.get_or_insert(true);
        self.log_level.get_or_insert_with(|| DEFAULT_LOG_LEVEL.to_string());
    }

    pub fn dev_log_mode(&self) -> bool {
        self.dev_log_mode.unwrap_or(true)
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn violations(&self) -> Vec<FieldError> {
        if self.filename.is_empty() {
            vec![FieldError::Missing("filename")]
        } else {
            Vec::new()
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        match self.violations().into_iter().next() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
