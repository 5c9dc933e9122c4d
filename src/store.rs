//! Preference persistence.
//!
//! The browser store is `localStorage`, which can throw on every call
//! (disabled storage, sandboxed iframes, quota). Reads and writes therefore
//! return `Result`, and the `*_or_*` helpers apply the fallback: a failed
//! read is "no stored preference" and a failed write is ignored so the theme
//! still works for the session.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::ThemeError;
use crate::preference::Preference;

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

/// String key-value store with `localStorage` semantics.
pub trait PreferenceStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, ThemeError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), ThemeError>;
    fn remove_item(&self, key: &str) -> Result<(), ThemeError>;
}

/// In-memory store for native builds and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), ThemeError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Read the stored preference, surfacing storage failures.
pub fn load<S: PreferenceStore + ?Sized>(store: &S, key: &str) -> Result<Option<Preference>, ThemeError> {
    let raw = store.get_item(key)?;
    Ok(raw.as_deref().and_then(Preference::parse))
}

/// Read the stored preference, treating any storage failure as unset.
pub fn load_or_unset<S: PreferenceStore + ?Sized>(store: &S, key: &str) -> Option<Preference> {
    match load(store, key) {
        Ok(preference) => preference,
        Err(err) => {
            log::warn!("theme: {} reading {key}: {err}; following system", err.error_code());
            None
        }
    }
}

/// Write `preference`, removing the key for unset.
pub fn save<S: PreferenceStore + ?Sized>(store: &S, key: &str, preference: Option<Preference>) -> Result<(), ThemeError> {
    match preference {
        Some(pref) => store.set_item(key, pref.as_str()),
        None => store.remove_item(key),
    }
}

/// Write `preference`, ignoring storage failures.
///
/// Returns whether the write reached the store.
pub fn save_or_ignore<S: PreferenceStore + ?Sized>(store: &S, key: &str, preference: Option<Preference>) -> bool {
    match save(store, key, preference) {
        Ok(()) => true,
        Err(err) => {
            log::warn!("theme: {} writing {key}: {err}; keeping choice for this session", err.error_code());
            false
        }
    }
}
