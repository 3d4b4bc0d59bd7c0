//! Environment variable lookup.
//!
//! Loading takes the environment as an explicit argument so that callers
//! (and tests) decide where variables come from.

use std::collections::HashMap;
use std::env;

/// Source of environment variables.
pub trait EnvSource {
    /// Returns the value of `key`, or `None` when it is unset.
    fn var(&self, key: &str) -> Option<String>;

    /// Like [`EnvSource::var`], but treats an empty value as unset.
    fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key).filter(|v| !v.is_empty())
    }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}
