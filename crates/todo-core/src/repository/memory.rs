//! In-Memory Storage
//!
//! A `KeyValueStore` backed by a shared map. Clones share the same map, so a
//! test can hand one clone to the store and inspect writes through another.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::error::StoreResult;
use super::traits::KeyValueStore;

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with raw values
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let storage = Self::new();
        storage.entries.borrow_mut().extend(
            entries.into_iter().map(|(k, v)| (k.into(), v.into())),
        );
        storage
    }

    /// Raw value under `key`, bypassing the trait
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
