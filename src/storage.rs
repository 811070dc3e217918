//! Client-Side Storage
//!
//! Key-value persistence behind a small trait so the session and theme
//! logic can run against an in-memory fake in tests instead of
//! `window.localStorage`.

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

/// Storage key for the session token
pub const TOKEN_KEY: &str = "token";
/// Storage key for the theme preference
pub const THEME_KEY: &str = "theme";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage` backed store
#[derive(Clone, Copy, Default)]
pub struct LocalStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory store, stands in for localStorage in tests
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore(RefCell<HashMap<String, String>>);

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.0.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::default();
        assert_eq!(store.get(TOKEN_KEY), None);

        store.set(TOKEN_KEY, "abc123");
        assert_eq!(store.get(TOKEN_KEY), Some("abc123".to_string()));

        // Last write wins
        store.set(TOKEN_KEY, "def456");
        assert_eq!(store.get(TOKEN_KEY), Some("def456".to_string()));

        store.remove(TOKEN_KEY);
        assert_eq!(store.get(TOKEN_KEY), None);
    }

    #[test]
    fn test_keys_are_independent() {
        let store = MemoryStore::default();
        store.set(TOKEN_KEY, "abc123");
        store.set(THEME_KEY, "dark");

        store.remove(TOKEN_KEY);
        assert_eq!(store.get(THEME_KEY), Some("dark".to_string()));
    }
}
