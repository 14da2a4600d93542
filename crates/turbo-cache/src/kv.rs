//! The key-value contract every backend implements.

use crate::CacheError;

/// A string key-value store scoped to one browsing context.
///
/// Reads take `&self`, writes take `&mut self`: the cart runs on a single
/// thread and owns its store outright.
pub trait KvStore {
    /// Get the raw value for `key`, or `None` if it was never set.
    fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Replace the value for `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), CacheError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn delete(&mut self, key: &str) -> Result<(), CacheError>;

    /// List every key currently stored.
    fn keys(&self) -> Result<Vec<String>, CacheError>;

    /// Check if a key exists.
    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.get(key)?.is_some())
    }
}
