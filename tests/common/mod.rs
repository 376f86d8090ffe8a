//! Shared test utilities.

#![allow(dead_code)]

use std::path::PathBuf;

use huddle::{
    Category, Contact, ConversationStore, MemoryStorage, Notification, NotificationStore,
    PreferenceStore, Theme,
};
use tempfile::TempDir;

/// The four-category seed used by the filter scenarios: one notification
/// per category, the first two unread.
pub fn seeded_notifications() -> NotificationStore {
    let seed = vec![
        notification(1, Category::Message, "New Message", false),
        notification(2, Category::Group, "Group Invitation", false),
        notification(3, Category::Like, "Post Liked", true),
        notification(4, Category::Achievement, "New Achievement", true),
    ];
    NotificationStore::with_seed(seed)
}

pub fn notification(id: u64, category: Category, title: &str, read: bool) -> Notification {
    Notification {
        id,
        category,
        title: title.to_string(),
        description: format!("{title} details"),
        created_at: "5 min ago".to_string(),
        read,
    }
}

/// Two contacts A (id 1) and B (id 2), empty logs, no active selection.
pub fn two_contacts() -> ConversationStore {
    let contacts = vec![
        Contact::new(1, "Contact A", "https://example.com/a.png"),
        Contact::new(2, "Contact B", "https://example.com/b.png"),
    ];
    ConversationStore::with_seed(contacts, Default::default())
}

/// Preference store over in-memory storage, defaulting to light.
pub fn memory_prefs() -> PreferenceStore {
    PreferenceStore::new(Box::new(MemoryStorage::new()), Theme::Light)
}

/// Write a seed file into a temp dir and return (dir, path).
///
/// The dir must stay alive for the path to remain valid.
pub fn temp_seed(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let path = temp_dir.path().join("seed.toml");
    std::fs::write(&path, content).expect("failed to write seed file");
    (temp_dir, path)
}
