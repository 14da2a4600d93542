//! Key-Value storage layer for TurboCart.
//!
//! A cart only needs a string store scoped to one browsing context:
//! `get(key)` returns the stored text or nothing, `set(key, value)` replaces it.
//! [`KvStore`] is that contract; [`MemoryStore`] and [`FileStore`] are the two
//! backends shipped here, and [`Cache`] layers JSON serialization on top.
//!
//! # Example
//!
//! ```rust
//! use turbo_cache::{Cache, MemoryStore};
//!
//! let mut cache = Cache::new(MemoryStore::new());
//! cache.set("ecommerce-cart", &vec!["sku1"]).unwrap();
//!
//! let items: Option<Vec<String>> = cache.get("ecommerce-cart").unwrap();
//! assert_eq!(items, Some(vec!["sku1".to_string()]));
//! ```

mod cache;
mod error;
mod file;
mod kv;
mod memory;

pub use cache::Cache;
pub use error::CacheError;
pub use file::FileStore;
pub use kv::KvStore;
pub use memory::MemoryStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KvStore, MemoryStore};
}
