use thiserror::Error;

use crate::prefs::persist::PersistError;

/// Errors surfaced by store operations.
///
/// Only operations that require existence or valid input return these.
/// Idempotent paths (`mark_read`, `remove` with unknown ids) never do:
/// absence of effect is the correct outcome for duplicate or stale UI
/// intents. No variant poisons a store; every store stays usable after
/// reporting an error.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} '{id}' not found")]
    NotFound { entity: &'static str, id: u64 },

    #[error("validation failed: {message}")]
    Validation { message: String },

    #[error("invalid state: {message}")]
    InvalidState { message: String },

    #[error("failed to persist preference")]
    Persist {
        #[from]
        source: PersistError,
    },
}

impl StoreError {
    /// User-friendly message for inline UI feedback.
    pub fn user_message(&self) -> &'static str {
        match self {
            StoreError::NotFound { .. } => "That item no longer exists",
            StoreError::Validation { .. } => "That input is not valid",
            StoreError::InvalidState { .. } => "That action is not available right now",
            StoreError::Persist { .. } => "Your preference could not be saved",
        }
    }
}
