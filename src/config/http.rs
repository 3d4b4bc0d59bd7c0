//! HTTP server configuration.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use super::error::FieldError;

/// Lowest accepted listen port.
pub const MIN_PORT: i64 = 1;
/// Highest accepted listen port.
pub const MAX_PORT: i64 = 65536;

/// Router run mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GinMode {
    Debug,
    Release,
    Test,
}

impl GinMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GinMode::Debug => "debug",
            GinMode::Release => "release",
            GinMode::Test => "test",
        }
    }
}

impl FromStr for GinMode {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(GinMode::Debug),
            "release" => Ok(GinMode::Release),
            "test" => Ok(GinMode::Test),
            _ => Err(FieldError::Invalid("gin_mode")),
        }
    }
}

impl fmt::Display for GinMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Run mode: "debug", "release" or "test" (overridable with GIN_MODE).
    pub gin_mode: String,
    /// Listen port (overridable with PORT).
    pub port: i64,
}

impl HttpConfig {
    /// Parsed run mode, or `None` if `gin_mode` is not a known value.
    pub fn mode(&self) -> Option<GinMode> {
        self.gin_mode.parse().ok()
    }

    /// All failing checks, in check order.
    pub fn violations(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if let Err(e) = self.gin_mode.parse::<GinMode>() {
            errors.push(e);
        }
        if !(MIN_PORT..=MAX_PORT).contains(&self.port) {
            errors.push(FieldError::Invalid("port"));
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
