use std::collections::HashMap;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::conversations::state::{Contact, Message, Sender};
use crate::notifications::state::{Category, Notification};
use crate::prefs::theme::Theme;

/// Initial population for the stores.
///
/// The engine treats seeding as configuration: a TOML file describes the
/// notifications, contacts, and conversation history present at startup,
/// standing in for a future server-side ingestion path. When no file
/// exists, the built-in demo dataset below is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Theme applied when no persisted preference exists yet.
    #[serde(default)]
    pub theme_default: Option<Theme>,
    #[serde(default)]
    pub notifications: Vec<NotificationSeed>,
    #[serde(default)]
    pub contacts: Vec<ContactSeed>,
}

/// One seeded notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationSeed {
    /// Unique within the seed; the loader rejects duplicates.
    pub id: u64,
    pub category: Category,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Display timestamp, e.g. "5 min ago".
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub read: bool,
}

/// One seeded contact with its conversation history, oldest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSeed {
    pub id: u64,
    pub display_name: String,
    #[serde(default)]
    pub avatar_ref: String,
    #[serde(default)]
    pub unread: u32,
    #[serde(default)]
    pub messages: Vec<MessageSeed>,
}

/// One seeded message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageSeed {
    pub sender: Sender,
    pub text: String,
}

impl SeedConfig {
    /// Seed rows for the notification store, in file order.
    pub fn notification_seed(&self) -> Vec<Notification> {
        self.notifications
            .iter()
            .map(|seed| Notification {
                id: seed.id,
                category: seed.category,
                title: seed.title.clone(),
                description: seed.description.clone(),
                created_at: seed.created_at.clone(),
                read: seed.read,
            })
            .collect()
    }

    /// Seed rows for the conversation store: contacts in file order plus
    /// one log per contact. Seeded messages are stamped at load time;
    /// their relative order is the file order.
    pub fn conversation_seed(&self) -> (Vec<Contact>, HashMap<u64, Vec<Message>>) {
        let now = SystemTime::now();
        let mut contacts = Vec::with_capacity(self.contacts.len());
        let mut logs = HashMap::new();
        for seed in &self.contacts {
            let mut contact =
                Contact::new(seed.id, seed.display_name.clone(), seed.avatar_ref.clone());
            contact.unread_count = seed.unread;
            contacts.push(contact);
            let log: Vec<Message> = seed
                .messages
                .iter()
                .map(|m| Message {
                    text: m.text.clone(),
                    sender: m.sender,
                    sent_at: now,
                })
                .collect();
            if !log.is_empty() {
                logs.insert(seed.id, log);
            }
        }
        (contacts, logs)
    }
}

impl Default for SeedConfig {
    /// Built-in demo dataset used when no seed file exists.
    fn default() -> Self {
        Self {
            theme_default: None,
            notifications: vec![
                NotificationSeed {
                    id: 1,
                    category: Category::Message,
                    title: "New Message".to_string(),
                    description: "John sent you a message in Web Developers group".to_string(),
                    created_at: "5 min ago".to_string(),
                    read: false,
                },
                NotificationSeed {
                    id: 2,
                    category: Category::Group,
                    title: "Group Invitation".to_string(),
                    description: "Design Thinking community invited you to join".to_string(),
                    created_at: "2 hours ago".to_string(),
                    read: false,
                },
                NotificationSeed {
                    id: 3,
                    category: Category::Like,
                    title: "Post Liked".to_string(),
                    description: "Sarah liked your recent post".to_string(),
                    created_at: "Yesterday".to_string(),
                    read: true,
                },
                NotificationSeed {
                    id: 4,
                    category: Category::Achievement,
                    title: "New Achievement".to_string(),
                    description: "You reached 100 contributions milestone".to_string(),
                    created_at: "3 days ago".to_string(),
                    read: true,
                },
            ],
            contacts: vec![
                ContactSeed {
                    id: 1,
                    display_name: "John Doe".to_string(),
                    avatar_ref: "https://randomuser.me/api/portraits/men/1.jpg".to_string(),
                    unread: 2,
                    messages: vec![MessageSeed {
                        sender: Sender::Them,
                        text: "Hey, how are you?".to_string(),
                    }],
                },
                ContactSeed {
                    id: 2,
                    display_name: "Jane Smith".to_string(),
                    avatar_ref: "https://randomuser.me/api/portraits/women/2.jpg".to_string(),
                    unread: 0,
                    messages: vec![MessageSeed {
                        sender: Sender::Them,
                        text: "See you later!".to_string(),
                    }],
                },
            ],
        }
    }
}
