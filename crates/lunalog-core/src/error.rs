//! Core error types for lunalog-core.
//!
//! The inference engine itself is total: anomalies in the event log resolve
//! to fallback values rather than errors. Everything here belongs to the
//! storage and configuration boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for lunalog-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Event-log store errors
    #[error("Store error at {path}: {message}")]
    Store { path: PathBuf, message: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Date parsing errors
    #[error("Invalid date: {0}")]
    Date(#[from] chrono::ParseError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
