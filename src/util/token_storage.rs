//! Durable storage for the auth token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The persisted token is the only record that a browser was previously
//! signed in. The session store reads it once at boot and writes it on every
//! login, register and logout.
//!
//! TRADE-OFFS
//! ==========
//! Storage failures (private mode, quota, disabled storage) are swallowed:
//! the session still works for the lifetime of the tab, it just won't
//! survive a reload.

#[cfg(test)]
#[path = "token_storage_test.rs"]
mod token_storage_test;

use std::sync::{Arc, Mutex, PoisonError};

/// Single-slot persistence for the bearer token.
pub trait TokenStorage {
    /// Previously persisted token. Empty values read as absent.
    fn load(&self) -> Option<String>;
    fn store(&self, token: &str);
    fn clear(&self);
}

/// Token storage in browser `localStorage`. A no-op outside the browser.
#[derive(Clone, Debug)]
pub struct LocalTokenStorage {
    key: String,
}

impl LocalTokenStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStorage for LocalTokenStorage {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let raw = local_storage()?.get_item(&self.key).ok().flatten()?;
            non_empty(raw)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &self.key;
            None
        }
    }

    fn store(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(&self.key, token);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(&self.key);
            }
        }
    }
}

/// In-memory token slot. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStorage {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStorage {
    /// Storage pre-seeded with `token`, as if persisted by an earlier visit.
    #[cfg(test)]
    pub(crate) fn with_token(token: &str) -> Self {
        let storage = Self::default();
        storage.store(token);
        storage
    }

    fn with_slot<R>(&self, f: impl FnOnce(&mut Option<String>) -> R) -> R {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut slot)
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self) -> Option<String> {
        self.with_slot(|slot| slot.clone()).and_then(non_empty)
    }

    fn store(&self, token: &str) {
        self.with_slot(|slot| *slot = Some(token.to_owned()));
    }

    fn clear(&self) {
        self.with_slot(|slot| *slot = None);
    }
}

fn non_empty(raw: String) -> Option<String> {
    if raw.is_empty() { None } else { Some(raw) }
}
