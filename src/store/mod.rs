//! Change-notification primitives shared by all stores.
//!
//! Each store owns its state exclusively and runs every operation to
//! completion before the next intent is processed. The view layer never
//! mutates store state directly: it reads snapshots and routes intents
//! through the documented operations. After a mutation commits, the store
//! broadcasts a typed event on every subscribed channel so the view can
//! re-render.

use std::sync::mpsc;

/// Fan-out list of mpsc senders for a store's event type.
///
/// Subscribers whose receiving end has been dropped are pruned on the
/// next broadcast, so a store never accumulates dead channels.
pub struct Subscribers<E: Clone> {
    senders: Vec<mpsc::Sender<E>>,
}

impl<E: Clone> Subscribers<E> {
    pub fn new() -> Self {
        Self {
            senders: Vec::new(),
        }
    }

    /// Register a new subscriber and return its receiving end.
    pub fn subscribe(&mut self) -> mpsc::Receiver<E> {
        let (tx, rx) = mpsc::channel();
        self.senders.push(tx);
        rx
    }

    /// Broadcast an event to all live subscribers.
    pub fn notify(&mut self, event: E) {
        self.senders.retain(|tx| tx.send(event.clone()).is_ok());
    }

    pub fn len(&self) -> usize {
        self.senders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.senders.is_empty()
    }
}

impl<E: Clone> Default for Subscribers<E> {
    fn default() -> Self {
        Self::new()
    }
}
