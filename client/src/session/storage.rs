//! Raw persistence backends for the session record.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` only ever reads and writes one serialized value. Backends
//! own where that value lives: browser `localStorage` in the hydrated app,
//! process memory in tests.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::sync::Mutex;

use super::SessionError;

/// `localStorage` key holding the serialized session.
pub const SESSION_KEY: &str = "staybook.session";

/// Storage for a single raw session value.
pub trait SessionStorage: Send + Sync {
    /// Return the stored value, or `None` when nothing is stored or the
    /// backend is unreachable.
    fn read(&self) -> Option<String>;

    /// Replace the stored value.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] if the backend rejects the write.
    fn write(&self, raw: &str) -> Result<(), SessionError>;

    /// Remove the stored value. Missing values are not an error.
    fn erase(&self);
}

/// Browser `localStorage` backend.
///
/// Outside the hydrated build there is no browser, so every read misses and
/// writes are dropped.
#[derive(Clone, Copy, Debug)]
pub struct BrowserSessionStorage {
    key: &'static str,
}

impl BrowserSessionStorage {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }
}

impl Default for BrowserSessionStorage {
    fn default() -> Self {
        Self::new(SESSION_KEY)
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStorage for BrowserSessionStorage {
    fn read(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(self.key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self.key;
            None
        }
    }

    fn write(&self, raw: &str) -> Result<(), SessionError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or_else(|| SessionError::Storage("localStorage unavailable".to_owned()))?;
            storage
                .set_item(self.key, raw)
                .map_err(|e| SessionError::Storage(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = raw;
            Ok(())
        }
    }

    fn erase(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(self.key);
            }
        }
    }
}

/// In-process backend used by tests and non-browser callers.
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    value: Mutex<Option<String>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `raw` already stored, exactly as given.
    pub fn with_raw(raw: &str) -> Self {
        Self { value: Mutex::new(Some(raw.to_owned())) }
    }
}

impl SessionStorage for MemorySessionStorage {
    fn read(&self) -> Option<String> {
        self.value.lock().ok()?.clone()
    }

    fn write(&self, raw: &str) -> Result<(), SessionError> {
        let mut slot = self
            .value
            .lock()
            .map_err(|_| SessionError::Storage("session storage lock poisoned".to_owned()))?;
        *slot = Some(raw.to_owned());
        Ok(())
    }

    fn erase(&self) {
        if let Ok(mut slot) = self.value.lock() {
            *slot = None;
        }
    }
}
