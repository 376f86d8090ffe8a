//! huddle: client-local interaction state engine for a social client.
//!
//! Three independent stores hold the only stateful logic of the client:
//! notifications (filter/read/delete), conversations (per-contact message
//! logs, composition, delivery ordering), and the persisted theme
//! preference. The rendering layer reads snapshots, routes user intents
//! into the store operations, and re-renders on the change events the
//! stores broadcast.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Store operation ──→ new state ──→ change event ──→ View
//!    ↑                                                           │
//!    └───────────────────────────────────────────────────────────┘
//! ```
//!
//! Stores are plain state containers: `Clone` handles over exclusively
//! owned state, mutated only through the documented operations. They do
//! no I/O except the theme's synchronous write-through at the
//! persistence boundary.

pub mod config;
pub mod conversations;
pub mod error;
pub mod logging;
pub mod notifications;
pub mod prefs;
pub mod store;

pub use config::{ConfigError, SeedConfig};
pub use conversations::{Contact, ConversationEvent, ConversationStore, Message, Sender};
pub use error::StoreError;
pub use notifications::{Category, Filter, Notification, NotificationEvent, NotificationStore};
pub use prefs::{MemoryStorage, PrefEvent, PreferenceStore, Theme, ThemeStorage, TomlFileStorage};
