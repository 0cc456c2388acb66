//! Repository Layer - Core Traits
//!
//! Defines the key-value durability contract the task store writes through.
//! Implementations: browser `localStorage` (UI crate), in-memory (tests).

use super::error::StoreResult;

/// String key-value storage surviving reloads
///
/// Writes are whole-value overwrites. Reads of an absent key return `Ok(None)`.
pub trait KeyValueStore {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }
}
