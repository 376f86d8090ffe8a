use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// UI color theme. Two states; transitions only via the preference
/// store's `set`/`toggle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Stable key used in the persisted preference entry.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted or user-supplied value. Anything but
    /// `"light"`/`"dark"` is a validation error.
    pub fn parse(s: &str) -> Result<Self, StoreError> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(StoreError::Validation {
                message: format!("unknown theme '{other}', expected 'light' or 'dark'"),
            }),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}
