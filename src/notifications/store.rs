//! Notification set with filter, mark-read, and delete semantics.

use std::sync::mpsc;
use std::sync::{Arc, RwLock};

use crate::notifications::state::{Category, Filter, Notification};
use crate::store::Subscribers;

/// Event broadcast after a notification mutation commits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationEvent {
    Added { id: u64 },
    MarkedRead { id: u64 },
    AllMarkedRead,
    Removed { id: u64 },
}

/// Thread-safe notification store.
///
/// Every mutating operation is a total function over the store: unknown
/// ids are tolerated silently, so duplicate or stale clicks (e.g. a rapid
/// double-click on delete) cannot crash the session. Reads return cloned
/// snapshots; mutating a returned `Vec` never affects stored state.
#[derive(Clone)]
pub struct NotificationStore {
    inner: Arc<RwLock<NotificationStoreInner>>,
}

struct NotificationStoreInner {
    /// Held in insertion/seed order; `list` never re-sorts.
    notifications: Vec<Notification>,
    /// Next id handed out by `push`. Always above every seeded id.
    next_id: u64,
    subscribers: Subscribers<NotificationEvent>,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(NotificationStoreInner {
                notifications: Vec::new(),
                next_id: 1,
                subscribers: Subscribers::new(),
            })),
        }
    }

    /// Create a store pre-populated with seeded notifications.
    ///
    /// Seed order becomes the stable listing order. Seeded ids are
    /// trusted here; the config loader rejects duplicates before they
    /// reach the store.
    pub fn with_seed(seed: Vec<Notification>) -> Self {
        let next_id = seed
            .iter()
            .map(|n| n.id.saturating_add(1))
            .max()
            .unwrap_or(1);
        Self {
            inner: Arc::new(RwLock::new(NotificationStoreInner {
                notifications: seed,
                next_id,
                subscribers: Subscribers::new(),
            })),
        }
    }

    /// Subscribe to change events.
    pub fn subscribe(&self) -> mpsc::Receiver<NotificationEvent> {
        self.write().subscribers.subscribe()
    }

    /// Ingest a new notification, assigning it a fresh unique id.
    ///
    /// This is the extension point a future server push would call into.
    /// New notifications arrive unread and append to the tail of the
    /// listing order.
    pub fn push(
        &self,
        category: Category,
        title: impl Into<String>,
        description: impl Into<String>,
        created_at: impl Into<String>,
    ) -> u64 {
        let mut inner = self.write();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.notifications.push(Notification {
            id,
            category,
            title: title.into(),
            description: description.into(),
            created_at: created_at.into(),
            read: false,
        });
        tracing::debug!(id, category = category.as_str(), "notification added");
        inner.subscribers.notify(NotificationEvent::Added { id });
        id
    }

    /// Snapshot of the non-deleted notifications matching `filter`.
    ///
    /// Order is the stable insertion/seed order regardless of read state.
    /// Returns an empty vec, never an error, when nothing matches.
    pub fn list(&self, filter: Filter) -> Vec<Notification> {
        self.read()
            .notifications
            .iter()
            .filter(|n| filter.matches(n.category))
            .cloned()
            .collect()
    }

    /// Mark a single notification read.
    ///
    /// No-op if the id is unknown or the notification is already read.
    pub fn mark_read(&self, id: u64) {
        let mut inner = self.write();
        let Some(notification) = inner.notifications.iter_mut().find(|n| n.id == id) else {
            tracing::debug!(id, "mark_read ignored: unknown id");
            return;
        };
        if notification.read {
            return;
        }
        notification.read = true;
        tracing::debug!(id, "notification marked read");
        inner.subscribers.notify(NotificationEvent::MarkedRead { id });
    }

    /// Mark the entire set read.
    ///
    /// Filter-independent: applies to every held notification, including
    /// ones excluded by whatever filter the view currently shows.
    pub fn mark_all_read(&self) {
        let mut inner = self.write();
        for notification in &mut inner.notifications {
            notification.read = true;
        }
        tracing::info!(total = inner.notifications.len(), "all notifications marked read");
        inner.subscribers.notify(NotificationEvent::AllMarkedRead);
    }

    /// Permanently delete a notification. No tombstone is kept.
    ///
    /// Idempotent: removing an unknown id is a silent no-op.
    pub fn remove(&self, id: u64) {
        let mut inner = self.write();
        let before = inner.notifications.len();
        inner.notifications.retain(|n| n.id != id);
        if inner.notifications.len() == before {
            tracing::debug!(id, "remove ignored: unknown id");
            return;
        }
        tracing::debug!(id, "notification removed");
        inner.subscribers.notify(NotificationEvent::Removed { id });
    }

    /// Unread count across the entire set, independent of any filter.
    ///
    /// Drives the badge/header counter.
    pub fn unread_count(&self) -> usize {
        self.read().notifications.iter().filter(|n| !n.read).count()
    }

    /// Total notifications currently held.
    pub fn len(&self) -> usize {
        self.read().notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().notifications.is_empty()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, NotificationStoreInner> {
        self.inner.read().expect("notification store lock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, NotificationStoreInner> {
        self.inner.write().expect("notification store lock poisoned")
    }
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new()
    }
}
