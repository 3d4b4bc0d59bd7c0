//! Configuration error types.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Configuration loading error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing `{0}` environment variable")]
    MissingPath(&'static str),
    #[error("failed to decode config: {0}")]
    Decode(#[from] DecodeError),
    #[error("invalid config: {0}")]
    Validation(#[from] ValidationError),
}

/// The config file could not be turned into an `AppConfig`.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid value {value:?} in `{name}` environment variable")]
    EnvOverride { name: &'static str, value: String },
}

/// Top-level section a validation failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Http,
    Database,
    Log,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Http => "http",
            Section::Database => "database",
            Section::Log => "log",
        };
        f.write_str(name)
    }
}

/// A single field that failed its check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("invalid `{0}`")]
    Invalid(&'static str),
    #[error("missing `{0}`")]
    Missing(&'static str),
}

/// A field violation annotated with its section, rendered as `http.(invalid `port`)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{section}.({field})")]
pub struct ValidationError {
    pub section: Section,
    pub field: FieldError,
}

impl ValidationError {
    pub fn new(section: Section, field: FieldError) -> Self {
        Self { section, field }
    }
}
