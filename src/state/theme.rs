//! Light/dark theme store with durable persistence and change notification.
//!
//! DESIGN
//! ======
//! One `ThemeStore` exists per page load. It is created in `App`, wrapped in
//! an `RwSignal`, and handed to components through Leptos context as a
//! [`ThemeHandle`]. Components read the mode reactively; non-reactive
//! observers (the `<html data-theme>` attribute) register as subscribers.
//!
//! The store starts in `Light` so server-rendered and hydrated markup agree;
//! [`ThemeStore::init`] then reads the persisted value once the app is live
//! in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures never reach the user. The first failed read or write is
//! logged and the store switches to session-only mode for the rest of the
//! page load.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::THEME_STORAGE_KEY;
use crate::error::{StorageError, UiError};

/// Display mode flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Persisted / attribute representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted value. Absent or unrecognised values are `Light`.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Minimal durable key-value storage used by the theme store.
pub trait KeyValueStore: Send + Sync {
    /// Read `key`; `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`. Unavailable outside the browser build.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage()?;
            storage
                .get_item(key)
                .map_err(|e| StorageError::Read(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage()?;
            storage
                .set_item(key, value)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or(StorageError::Unavailable)?
        .local_storage()
        .ok()
        .flatten()
        .ok_or(StorageError::Unavailable)
}

/// In-memory storage. Clones share entries, so a clone handed to a second
/// store behaves like the same browser profile after a reload.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage whose reads and writes all fail, like a blocked `localStorage`.
    pub fn blocked() -> Self {
        Self {
            fail_reads: true,
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Storage that reads normally but rejects writes (quota exceeded).
    pub fn read_only() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Seed a raw value, bypassing failure flags.
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
        }
        self
    }

    /// Raw stored value, bypassing failure flags.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Unavailable);
        }
        let entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::Read("lock poisoned".to_owned()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Write("quota exceeded".to_owned()));
        }
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::Write("lock poisoned".to_owned()))?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Handle returned by [`ThemeStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(ThemeMode) + Send + Sync>;

/// Process-wide theme state.
pub struct ThemeStore {
    mode: ThemeMode,
    storage: Box<dyn KeyValueStore>,
    durable: bool,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("mode", &self.mode)
            .field("durable", &self.durable)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl ThemeStore {
    /// Create a store in `Light` mode without touching storage.
    pub fn new(storage: impl KeyValueStore + 'static) -> Self {
        Self {
            mode: ThemeMode::Light,
            storage: Box::new(storage),
            durable: true,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Create a store and immediately load the persisted mode.
    pub fn load(storage: impl KeyValueStore + 'static) -> Self {
        let mut store = Self::new(storage);
        store.init();
        store
    }

    /// Read the persisted mode, adopt it, and notify subscribers so the
    /// document attribute reflects it. Falls back to `Light`.
    pub fn init(&mut self) -> ThemeMode {
        let mode = self.load_mode();
        self.notify();
        mode
    }

    fn load_mode(&mut self) -> ThemeMode {
        let stored = match self.storage.get(THEME_STORAGE_KEY) {
            Ok(raw) => raw,
            Err(e) => {
                self.degrade(&e);
                None
            }
        };
        self.mode = ThemeMode::from_stored(stored.as_deref());
        log::debug!("theme initialised: {}", self.mode.as_str());
        self.mode
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Whether changes are still being written to durable storage.
    pub fn is_durable(&self) -> bool {
        self.durable
    }

    /// Flip light/dark, persist, and notify every subscriber.
    pub fn toggle(&mut self) -> ThemeMode {
        let mode = self.flip();
        self.notify();
        mode
    }

    fn flip(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        self.persist();
        log::debug!("theme toggled: {}", self.mode.as_str());
        self.mode
    }

    /// Register an observer called with the new mode after every change.
    pub fn subscribe(&mut self, listener: impl Fn(ThemeMode) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Arc::new(listener)));
        id
    }

    /// Remove an observer. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn persist(&mut self) {
        if !self.durable {
            return;
        }
        if let Err(e) = self.storage.set(THEME_STORAGE_KEY, self.mode.as_str()) {
            self.degrade(&e);
        }
    }

    fn degrade(&mut self, err: &StorageError) {
        if self.durable {
            match err {
                StorageError::Unavailable => log::debug!("theme storage unavailable; session-only theme"),
                _ => log::warn!("theme storage failed ({err}); session-only theme"),
            }
        }
        self.durable = false;
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener(self.mode);
        }
    }

    fn listener_snapshot(&self) -> Vec<Listener> {
        self.listeners.iter().map(|(_, listener)| Arc::clone(listener)).collect()
    }
}

/// Context handle to the page's single [`ThemeStore`].
#[derive(Clone, Copy, Debug)]
pub struct ThemeHandle(RwSignal<ThemeStore>);

impl ThemeHandle {
    /// Current mode; tracked, so closures reading it re-run on toggle.
    pub fn mode(self) -> ThemeMode {
        self.0.with(ThemeStore::mode)
    }

    pub fn mode_untracked(self) -> ThemeMode {
        self.0.with_untracked(ThemeStore::mode)
    }

    pub fn toggle(self) -> ThemeMode {
        self.change(ThemeStore::flip)
    }

    /// Load the persisted mode. Called once, from a client-only effect.
    pub fn init(self) -> ThemeMode {
        self.change(ThemeStore::load_mode)
    }

    /// Apply `change` under the signal's write guard, then notify listeners
    /// once the guard is released so they may read or re-enter the handle.
    fn change(self, change: fn(&mut ThemeStore) -> ThemeMode) -> ThemeMode {
        let Some((mode, listeners)) = self.0.try_update(|store| (change(store), store.listener_snapshot())) else {
            return ThemeMode::default();
        };
        for listener in listeners {
            listener(mode);
        }
        mode
    }

    /// Register a non-reactive observer; `None` once the store is disposed.
    pub fn subscribe(self, listener: impl Fn(ThemeMode) + Send + Sync + 'static) -> Option<SubscriptionId> {
        self.0.try_update_untracked(|store| store.subscribe(listener))
    }

    pub fn unsubscribe(self, id: SubscriptionId) -> bool {
        self.0
            .try_update_untracked(|store| store.unsubscribe(id))
            .unwrap_or(false)
    }
}

/// Create the page's theme store, hook the document attribute to it, and
/// provide it as context. Call once, from `App`.
pub fn provide_theme(storage: impl KeyValueStore + 'static) -> ThemeHandle {
    let mut store = ThemeStore::new(storage);
    store.subscribe(crate::util::dom::apply_theme_attribute);
    let handle = ThemeHandle(RwSignal::new(store));
    provide_context(handle);
    handle
}

/// Theme handle from context, or [`UiError::MissingThemeStore`].
pub fn try_use_theme() -> Result<ThemeHandle, UiError> {
    use_context::<ThemeHandle>().ok_or(UiError::MissingThemeStore)
}

/// Theme handle from context. Panics when rendered outside `App`.
pub fn use_theme() -> ThemeHandle {
    match try_use_theme() {
        Ok(handle) => handle,
        Err(e) => panic!("{e}"),
    }
}
