//! Contacts, per-contact conversation logs, and the active selection.

use std::collections::HashMap;
use std::sync::mpsc;
use std::sync::{Arc, RwLock};
use std::time::SystemTime;

use crate::conversations::state::{Contact, Message, Sender};
use crate::error::StoreError;
use crate::store::Subscribers;

/// Event broadcast after a conversation mutation commits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversationEvent {
    Selected { contact_id: u64 },
    MessageSent { contact_id: u64 },
    MessageReceived { contact_id: u64 },
}

/// Thread-safe conversation store.
///
/// Owns the contact list, one append-only message log per contact, and
/// the single active selection. Reads return cloned snapshots; all
/// mutations go through the operations below and run to completion
/// before the next intent is processed.
#[derive(Clone)]
pub struct ConversationStore {
    inner: Arc<RwLock<ConversationStoreInner>>,
}

struct ConversationStoreInner {
    /// Stable display order (seed order).
    contacts: Vec<Contact>,
    /// Conversation log per contact id. Absent entry == empty log.
    logs: HashMap<u64, Vec<Message>>,
    /// At most one contact is selected at a time.
    active: Option<u64>,
    subscribers: Subscribers<ConversationEvent>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(ConversationStoreInner {
                contacts: Vec::new(),
                logs: HashMap::new(),
                active: None,
                subscribers: Subscribers::new(),
            })),
        }
    }

    /// Create a store pre-populated with contacts and their logs.
    ///
    /// Contact previews are derived from the tail of each seeded log.
    /// The config loader guarantees ids are unique and every log maps to
    /// a known contact before this is called.
    pub fn with_seed(contacts: Vec<Contact>, logs: HashMap<u64, Vec<Message>>) -> Self {
        let mut inner = ConversationStoreInner {
            contacts,
            logs,
            active: None,
            subscribers: Subscribers::new(),
        };
        let ids: Vec<u64> = inner.contacts.iter().map(|c| c.id).collect();
        for id in ids {
            inner.refresh_preview(id);
        }
        Self {
            inner: Arc::new(RwLock::new(inner)),
        }
    }

    /// Subscribe to change events.
    pub fn subscribe(&self) -> mpsc::Receiver<ConversationEvent> {
        self.write().subscribers.subscribe()
    }

    /// Register a new contact.
    ///
    /// This is how a future directory/ingestion layer grows the contact
    /// list beyond the seed. Duplicate ids are rejected so a stale
    /// re-registration cannot fork an existing conversation.
    pub fn add_contact(&self, contact: Contact) -> Result<(), StoreError> {
        let mut inner = self.write();
        if inner.contacts.iter().any(|c| c.id == contact.id) {
            return Err(StoreError::Validation {
                message: format!("contact id {} already registered", contact.id),
            });
        }
        tracing::debug!(id = contact.id, name = %contact.display_name, "contact added");
        inner.contacts.push(contact);
        Ok(())
    }

    /// Make a contact the active selection and clear its unread count.
    ///
    /// Idempotent: re-selecting the active contact changes nothing and
    /// emits no event. Does not touch any message log or any other
    /// contact's unread count.
    pub fn select_contact(&self, contact_id: u64) -> Result<(), StoreError> {
        let mut inner = self.write();
        let contact = inner
            .contacts
            .iter_mut()
            .find(|c| c.id == contact_id)
            .ok_or(StoreError::NotFound {
                entity: "contact",
                id: contact_id,
            })?;
        contact.unread_count = 0;
        if inner.active == Some(contact_id) {
            return Ok(());
        }
        inner.active = Some(contact_id);
        tracing::info!(contact_id, "conversation selected");
        inner
            .subscribers
            .notify(ConversationEvent::Selected { contact_id });
        Ok(())
    }

    /// Append an outgoing message to the active conversation.
    ///
    /// Requires an active selection (`InvalidState` otherwise) and a
    /// non-empty text after trimming (`Validation` otherwise). The
    /// rejection is explicit, not a silent drop, so the view can disable
    /// the send button or show inline feedback.
    pub fn send_message(&self, text: &str) -> Result<(), StoreError> {
        let mut inner = self.write();
        let Some(contact_id) = inner.active else {
            return Err(StoreError::InvalidState {
                message: "no conversation selected".to_string(),
            });
        };
        let text = validate_text(text)?;
        inner.append(contact_id, Sender::Me, text);
        tracing::debug!(contact_id, "message sent");
        inner
            .subscribers
            .notify(ConversationEvent::MessageSent { contact_id });
        Ok(())
    }

    /// Append an incoming message from a contact.
    ///
    /// This is the single extension point a future transport layer calls
    /// into. Bumps the contact's unread count only when its conversation
    /// is not the active selection.
    pub fn receive_message(&self, contact_id: u64, text: &str) -> Result<(), StoreError> {
        let mut inner = self.write();
        if !inner.contacts.iter().any(|c| c.id == contact_id) {
            return Err(StoreError::NotFound {
                entity: "contact",
                id: contact_id,
            });
        }
        let text = validate_text(text)?;
        inner.append(contact_id, Sender::Them, text);
        if inner.active != Some(contact_id) {
            if let Some(contact) = inner.contacts.iter_mut().find(|c| c.id == contact_id) {
                contact.unread_count += 1;
            }
        }
        tracing::debug!(contact_id, "message received");
        inner
            .subscribers
            .notify(ConversationEvent::MessageReceived { contact_id });
        Ok(())
    }

    /// Snapshot of a contact's ordered conversation log.
    ///
    /// Empty vec for a known contact with no messages yet; `NotFound`
    /// for an unknown contact.
    pub fn log(&self, contact_id: u64) -> Result<Vec<Message>, StoreError> {
        let inner = self.read();
        if !inner.contacts.iter().any(|c| c.id == contact_id) {
            return Err(StoreError::NotFound {
                entity: "contact",
                id: contact_id,
            });
        }
        Ok(inner.logs.get(&contact_id).cloned().unwrap_or_default())
    }

    /// Snapshot of all contacts in stable display order.
    pub fn contacts(&self) -> Vec<Contact> {
        self.read().contacts.clone()
    }

    /// Snapshot of a single contact.
    pub fn contact(&self, contact_id: u64) -> Option<Contact> {
        self.read().contacts.iter().find(|c| c.id == contact_id).cloned()
    }

    /// Id of the active selection, if any.
    pub fn active_contact_id(&self) -> Option<u64> {
        self.read().active
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, ConversationStoreInner> {
        self.inner.read().expect("conversation store lock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, ConversationStoreInner> {
        self.inner.write().expect("conversation store lock poisoned")
    }
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationStoreInner {
    /// Append to the tail of a contact's log and refresh its preview.
    fn append(&mut self, contact_id: u64, sender: Sender, text: String) {
        let sent_at = SystemTime::now();
        self.logs.entry(contact_id).or_default().push(Message {
            text,
            sender,
            sent_at,
        });
        self.refresh_preview(contact_id);
    }

    /// Recompute a contact's derived preview fields from its log tail.
    fn refresh_preview(&mut self, contact_id: u64) {
        let tail = self
            .logs
            .get(&contact_id)
            .and_then(|log| log.last())
            .map(|m| (m.text.clone(), m.sent_at));
        if let Some(contact) = self.contacts.iter_mut().find(|c| c.id == contact_id) {
            if let Some((preview, at)) = tail {
                contact.last_message_preview = Some(preview);
                contact.last_message_time = Some(at);
            }
        }
    }
}

/// Shared message-text validation: trims, rejects empty/whitespace-only.
fn validate_text(text: &str) -> Result<String, StoreError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(StoreError::Validation {
            message: "message text is empty".to_string(),
        });
    }
    Ok(trimmed.to_string())
}
