//! TOML-based application configuration.
//!
//! Stores user preferences:
//! - an override for the decks file location
//! - review session behavior
//!
//! Configuration is stored at `~/.config/learny/config.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::{ConfigError, Result};

/// Storage configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Override for the decks file location. Defaults to
    /// `decks.json` under the data directory when unset.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

/// Review session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewConfig {
    /// Print the next review date after each graded card.
    #[serde(default = "default_true")]
    pub show_next_due: bool,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            show_next_due: true,
        }
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/learny/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub review: ReviewConfig,
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Path of the config file under the data directory.
    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, writing defaults on first run.
    ///
    /// # Errors
    /// Returns an error if an existing config file cannot be parsed.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path,
                    message: e.to_string(),
                })?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Load, falling back to defaults on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert!(parsed.review.show_next_due);
        assert!(parsed.storage.data_file.is_none());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let parsed: Config = toml::from_str("[storage]\ndata_file = \"/tmp/decks.json\"\n").unwrap();
        assert_eq!(parsed.storage.data_file, Some(PathBuf::from("/tmp/decks.json")));
        assert!(parsed.review.show_next_due);
    }
}
