//! In-memory key-value store.
//!
//! Backing map lives only as long as the store; useful for tests and for
//! running the container without touching the filesystem.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use super::{KeyValueStore, StoreError};

/// Key-value store backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_returns_none() {
        let store = MemoryStore::new();
        assert_eq!(store.read("cart"), None);
    }

    #[test]
    fn test_write_then_read() {
        let store = MemoryStore::new();
        store.write("cart", "[]").unwrap();
        assert_eq!(store.read("cart").as_deref(), Some("[]"));
    }

    #[test]
    fn test_overwrite_replaces_value() {
        let store = MemoryStore::new();
        store.write("cart", "first").unwrap();
        store.write("cart", "second").unwrap();
        assert_eq!(store.read("cart").as_deref(), Some("second"));
    }

    #[test]
    fn test_keys_are_independent() {
        let store = MemoryStore::new();
        store.write("cart", "a").unwrap();
        store.write("wishlist", "b").unwrap();
        assert_eq!(store.read("cart").as_deref(), Some("a"));
        assert_eq!(store.read("wishlist").as_deref(), Some("b"));
    }
}
