//! Repository Layer - Core Traits
//!
//! The key-value storage the accessor is built on. The browser's
//! `localStorage` implements it in the app; `MemoryStorage` stands in
//! for it everywhere else.

use crate::domain::StorageResult;

/// Synchronous string key-value storage
pub trait KeyValueStorage {
    /// Read a value; `Ok(None)` when the key is absent
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}
