//! Theme preference with write-through persistence.

use std::sync::mpsc;
use std::sync::{Arc, RwLock};

use crate::error::StoreError;
use crate::prefs::persist::ThemeStorage;
use crate::prefs::theme::Theme;
use crate::store::Subscribers;

/// Event broadcast after the theme changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefEvent {
    ThemeChanged { theme: Theme },
}

/// Process-wide theme preference.
///
/// Two states, light and dark; transitions only via `set`/`toggle`.
/// The initial state is resolved once at construction: the persisted
/// entry wins, falling back to the injected system default on first run
/// or when the persisted value is unreadable.
#[derive(Clone)]
pub struct PreferenceStore {
    inner: Arc<RwLock<PreferenceStoreInner>>,
}

struct PreferenceStoreInner {
    theme: Theme,
    storage: Box<dyn ThemeStorage>,
    subscribers: Subscribers<PrefEvent>,
}

impl PreferenceStore {
    /// Build the store, resolving the initial theme from storage.
    ///
    /// `system_default` stands in for an environment-derived preference
    /// (the host decides how to detect it); it applies only when no
    /// valid persisted value exists.
    pub fn new(storage: Box<dyn ThemeStorage>, system_default: Theme) -> Self {
        let theme = match storage.load() {
            Ok(Some(value)) => match Theme::parse(&value) {
                Ok(theme) => theme,
                Err(_) => {
                    tracing::warn!(value = %value, "ignoring invalid persisted theme");
                    system_default
                }
            },
            Ok(None) => system_default,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load persisted theme");
                system_default
            }
        };
        tracing::info!(theme = theme.as_str(), "theme resolved");
        Self {
            inner: Arc::new(RwLock::new(PreferenceStoreInner {
                theme,
                storage,
                subscribers: Subscribers::new(),
            })),
        }
    }

    /// Subscribe to change events.
    pub fn subscribe(&self) -> mpsc::Receiver<PrefEvent> {
        self.write().subscribers.subscribe()
    }

    /// Current theme.
    pub fn get(&self) -> Theme {
        self.read().theme
    }

    /// Apply and persist a new theme.
    ///
    /// The in-memory value is applied even when the write-through fails,
    /// so the session keeps working; the persistence error is still
    /// reported for user-facing feedback.
    pub fn set(&self, theme: Theme) -> Result<(), StoreError> {
        let mut inner = self.write();
        let changed = inner.theme != theme;
        inner.theme = theme;
        if changed {
            tracing::info!(theme = theme.as_str(), "theme changed");
            inner.subscribers.notify(PrefEvent::ThemeChanged { theme });
        }
        inner.storage.store(theme.as_str())?;
        Ok(())
    }

    /// Parse and apply a user-supplied theme value.
    ///
    /// Anything but `"light"`/`"dark"` fails validation without touching
    /// the current state.
    pub fn set_str(&self, value: &str) -> Result<(), StoreError> {
        self.set(Theme::parse(value)?)
    }

    /// Flip between light and dark; returns the new theme.
    pub fn toggle(&self) -> Result<Theme, StoreError> {
        let next = self.get().opposite();
        self.set(next)?;
        Ok(next)
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, PreferenceStoreInner> {
        self.inner.read().expect("preference store lock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, PreferenceStoreInner> {
        self.inner.write().expect("preference store lock poisoned")
    }
}
