//! Key-value persistence for the landing page.
//!
//! The browser implementation wraps `window.localStorage`; the in-memory one
//! backs the unit tests and any environment without web storage.

use std::cell::RefCell;
use std::collections::HashMap;

use web_sys::window;

use crate::error::LandingError;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), LandingError>;
}

/// `window.localStorage`, looked up on every access so a missing window
/// simply reads as empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        window()?.local_storage().ok()?
    }

    pub fn is_available() -> bool {
        Self::storage().is_some()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), LandingError> {
        let storage = Self::storage().ok_or(LandingError::StorageUnavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| LandingError::StorageWrite { key: key.to_string() })
    }
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), LandingError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
