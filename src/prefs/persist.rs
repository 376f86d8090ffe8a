//! Persistence port for the theme preference.
//!
//! The store reads once at startup and writes through on every change.
//! The port is a trait so tests (and future hosts) can swap the durable
//! backend without touching the store.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;

/// Key under which the theme value is persisted.
pub const THEME_KEY: &str = "theme";

/// Errors from the durable key-value backend.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to read preference file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write preference file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse preference file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to encode preference file '{path}': {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: toml::ser::Error,
    },
}

/// Durable client-local key-value entry for the theme.
pub trait ThemeStorage: Send + Sync {
    /// Load the persisted value, if any. `None` on first run.
    fn load(&self) -> Result<Option<String>, PersistError>;

    /// Persist the value, replacing any previous one.
    fn store(&self, value: &str) -> Result<(), PersistError>;
}

/// TOML-file backend under the platform config directory.
///
/// The file is a flat string map so future preferences can share it;
/// unknown keys are preserved on write.
pub struct TomlFileStorage {
    path: PathBuf,
}

impl TomlFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: `<config_dir>/huddle/prefs.toml`.
    ///
    /// Falls back to the current directory if the platform config dir is
    /// unavailable.
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("huddle").join("prefs.toml")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<HashMap<String, String>, PersistError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(&self.path).map_err(|e| PersistError::Read {
            path: self.path.clone(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| PersistError::Parse {
            path: self.path.clone(),
            source: e,
        })
    }
}

impl ThemeStorage for TomlFileStorage {
    fn load(&self) -> Result<Option<String>, PersistError> {
        Ok(self.read_map()?.remove(THEME_KEY))
    }

    fn store(&self, value: &str) -> Result<(), PersistError> {
        // Tolerate an unreadable existing file on write: the new value
        // must still land even if the old file was corrupted. Any keys
        // the corrupt file held are lost; say so in the log.
        let mut map = match self.read_map() {
            Ok(map) => map,
            Err(e) => {
                tracing::warn!(error = %e, "replacing unreadable preference file");
                HashMap::new()
            }
        };
        map.insert(THEME_KEY.to_string(), value.to_string());
        let content = toml::to_string(&map).map_err(|e| PersistError::Encode {
            path: self.path.clone(),
            source: e,
        })?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| PersistError::Write {
                path: self.path.clone(),
                source: e,
            })?;
        }
        fs::write(&self.path, content).map_err(|e| PersistError::Write {
            path: self.path.clone(),
            source: e,
        })
    }
}

/// In-memory backend for tests and ephemeral sessions.
pub struct MemoryStorage {
    value: Mutex<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            value: Mutex::new(None),
        }
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Mutex::new(Some(value.into())),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeStorage for MemoryStorage {
    fn load(&self) -> Result<Option<String>, PersistError> {
        Ok(self.value.lock().expect("storage lock poisoned").clone())
    }

    fn store(&self, value: &str) -> Result<(), PersistError> {
        *self.value.lock().expect("storage lock poisoned") = Some(value.to_string());
        Ok(())
    }
}
