//! Bootstrap for the web service: loads and validates its configuration.

pub mod config;
