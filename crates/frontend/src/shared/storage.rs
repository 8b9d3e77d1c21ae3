//! Durable client-side key-value storage.
//!
//! All persistence goes through the `KeyValueStore` capability so the chat
//! history and session identity can be exercised against an in-memory store
//! in tests. The browser implementation is localStorage.

use web_sys::Storage;

pub trait KeyValueStore {
    /// Whether durable storage exists in this execution context.
    fn is_available(&self) -> bool;
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// localStorage-backed store.
#[derive(Default)]
pub struct BrowserStorage {
    storage: Option<Storage>,
}

impl BrowserStorage {
    pub fn new() -> Self {
        Self {
            storage: web_sys::window().and_then(|w| w.local_storage().ok().flatten()),
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn is_available(&self) -> bool {
        self.storage.is_some()
    }

    fn get(&self, key: &str) -> Option<String> {
        self.storage
            .as_ref()
            .and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(s) = &self.storage {
            let _ = s.set_item(key, value);
        }
    }
}

#[cfg(test)]
pub use memory::{MemoryStore, UnavailableStore};

#[cfg(test)]
mod memory {
    use super::KeyValueStore;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory stand-in for localStorage.
    #[derive(Default)]
    pub struct MemoryStore {
        items: RefCell<HashMap<String, String>>,
    }

    impl KeyValueStore for MemoryStore {
        fn is_available(&self) -> bool {
            true
        }

        fn get(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.items
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }
    }

    /// Store reporting storage as absent (non-browser execution context).
    #[derive(Default)]
    pub struct UnavailableStore;

    impl KeyValueStore for UnavailableStore {
        fn is_available(&self) -> bool {
            false
        }

        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, _key: &str, _value: &str) {}
    }
}
