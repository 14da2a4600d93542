//! Typed wrapper over a [`KvStore`] with automatic JSON serialization.

use serde::{de::DeserializeOwned, Serialize};

use crate::{CacheError, KvStore};

/// Type-safe cache over any [`KvStore`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
#[derive(Debug, Clone, Default)]
pub struct Cache<S> {
    store: S,
}

impl<S: KvStore> Cache<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist and an error if the stored
    /// text does not deserialize into `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Set a value in the cache.
    pub fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), CacheError> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, &raw)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.store.exists(key)
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Entry {
        id: String,
        quantity: u32,
    }

    #[test]
    fn test_round_trip_preserves_order() {
        let mut cache = Cache::new(MemoryStore::new());
        let entries = vec![
            Entry { id: "b".into(), quantity: 2 },
            Entry { id: "a".into(), quantity: 1 },
        ];
        cache.set("cart", &entries).unwrap();

        let loaded: Vec<Entry> = cache.get("cart").unwrap().unwrap();
        assert_eq!(loaded, entries);
    }

    #[test]
    fn test_stored_text_is_plain_json() {
        let mut cache = Cache::new(MemoryStore::new());
        cache.set("cart", &Entry { id: "a".into(), quantity: 1 }).unwrap();
        assert_eq!(
            cache.store().raw("cart"),
            Some(r#"{"id":"a","quantity":1}"#)
        );
    }

    #[test]
    fn test_shape_mismatch_is_an_error() {
        let cache = Cache::new(MemoryStore::new().with_entry("cart", r#"{"not":"a list"}"#));
        let result: Result<Option<Vec<Entry>>, _> = cache.get("cart");
        assert!(matches!(result, Err(CacheError::Serialize(_))));
    }

    #[test]
    fn test_missing_key() {
        let cache = Cache::new(MemoryStore::new());
        let value: Option<Vec<Entry>> = cache.get("cart").unwrap();
        assert!(value.is_none());
        assert!(!cache.exists("cart").unwrap());
    }
}
