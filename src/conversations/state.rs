use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// Who authored a message, relative to the local user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Me,
    Them,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Me => "me",
            Self::Them => "them",
        }
    }
}

/// One entry in a conversation log.
///
/// Logs are append-only: messages are never edited or deleted, and every
/// append goes to the tail. When two messages share a timestamp, append
/// order breaks the tie, so the log's vec order is authoritative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub sender: Sender,
    pub sent_at: SystemTime,
}

/// A known contact and the derived summary of its conversation.
///
/// `id`, `display_name`, and `avatar_ref` are immutable. The preview
/// fields are recomputed by the store whenever the conversation log
/// changes; `unread_count` is bumped by incoming messages while the
/// conversation is not active and reset to zero on selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: u64,
    pub display_name: String,
    /// Opaque reference (e.g. URL) resolved to an image by the view layer.
    pub avatar_ref: String,
    pub last_message_preview: Option<String>,
    pub last_message_time: Option<SystemTime>,
    pub unread_count: u32,
}

impl Contact {
    pub fn new(id: u64, display_name: impl Into<String>, avatar_ref: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            avatar_ref: avatar_ref.into(),
            last_message_preview: None,
            last_message_time: None,
            unread_count: 0,
        }
    }
}
