//! Core error types for learny-core.
//!
//! This module defines the error hierarchy used across the library,
//! built on thiserror. Store, configuration, and validation failures
//! each get their own enum and fold into [`CoreError`] at the crate
//! boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for learny-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Deck store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Deck-store specific errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read the decks file
    #[error("Failed to load decks from {path}: {source}")]
    LoadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the decks file
    #[error("Failed to save decks to {path}: {source}")]
    SaveFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON, date string, or card record
    #[error("Failed to parse decks file {path}: {message}")]
    ParseFailed { path: PathBuf, message: String },

    /// Data directory could not be determined or created
    #[error("Failed to prepare data directory: {0}")]
    DataDir(String),
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
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Required text field is empty
    #[error("'{field}' must not be empty")]
    EmptyField { field: &'static str },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: &'static str, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
