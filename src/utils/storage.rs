use std::cell::RefCell;
use std::collections::HashMap;
use web_sys::{window, Storage};

/// Flat string key/value store (localStorage in the browser)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// `window.localStorage`, resolved on every access
#[derive(Clone, Copy, Default)]
pub struct LocalStorage;

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = get_local_storage().ok_or("localStorage is not available")?;
        storage
            .set_item(key, value)
            .map_err(|_| format!("Failed to write '{}' to localStorage", key))
    }
}

/// In-memory store, used where no browser is around
#[derive(Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn with_items<'a>(items: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::default();
        for (k, v) in items {
            store.items.borrow_mut().insert(k.to_string(), v.to_string());
        }
        store
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
