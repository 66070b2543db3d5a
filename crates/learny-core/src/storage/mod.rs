//! Persistence: whole-file JSON deck store and TOML configuration.

mod config;
mod store;

pub use config::{Config, ReviewConfig, StorageConfig};
pub use store::{DeckMap, Store};

use std::path::PathBuf;

use crate::error::{Result, StoreError};

/// Returns `~/.config/learny[-dev]/` based on LEARNY_ENV, creating the
/// directory if needed.
///
/// Set LEARNY_ENV=dev to keep development data separate.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("LEARNY_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("learny-dev")
    } else {
        base_dir.join("learny")
    };

    std::fs::create_dir_all(&dir).map_err(|e| StoreError::DataDir(e.to_string()))?;
    Ok(dir)
}
