use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::types::SeedConfig;

/// Errors that can occur when loading the seed configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read seed file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("seed validation failed: {message}")]
    Validation { message: String },
}

impl SeedConfig {
    /// Returns the path to the default seed file.
    ///
    /// Uses `~/.config/huddle/seed.toml` on Unix/macOS, or equivalent on
    /// other platforms via `dirs::config_dir()`. Falls back to the
    /// current directory if the config dir is unavailable.
    pub fn seed_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("huddle").join("seed.toml")
    }

    /// Loads the seed configuration from the default seed file.
    ///
    /// - If the file doesn't exist, returns the built-in demo dataset.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::seed_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no seed file, using demo dataset");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Loads and validates the seed configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: SeedConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        tracing::info!(
            path = %path.display(),
            notifications = config.notifications.len(),
            contacts = config.contacts.len(),
            "seed loaded"
        );
        Ok(config)
    }

    /// Validates the seed configuration.
    ///
    /// Checks:
    /// - Notification ids are unique
    /// - Contact ids are unique
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut notification_ids = HashSet::new();
        for seed in &self.notifications {
            if !notification_ids.insert(seed.id) {
                return Err(ConfigError::Validation {
                    message: format!("duplicate notification id {}", seed.id),
                });
            }
        }

        let mut contact_ids = HashSet::new();
        for seed in &self.contacts {
            if !contact_ids.insert(seed.id) {
                return Err(ConfigError::Validation {
                    message: format!("duplicate contact id {}", seed.id),
                });
            }
        }

        Ok(())
    }
}
