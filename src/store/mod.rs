//! Key-value store
//!
//! The persistence capability every vault component writes through: a synchronous,
//! string-keyed, string-valued map with no transactions and no expiry.

pub mod file;
pub mod keys;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::StoreError;

/// A persistent string-to-string map.
///
/// Implementations must make a completed `set` or `delete` visible to every later
/// `get` on the same store.
pub trait KvStore: Send {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes `key`. Removing an absent key is not an error.
    fn delete(&mut self, key: &str) -> Result<(), StoreError>;

    /// Returns every key currently stored.
    fn keys(&self) -> Result<Vec<String>, StoreError>;
}

impl<S: KvStore + ?Sized> KvStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).delete(key)
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        (**self).keys()
    }
}
