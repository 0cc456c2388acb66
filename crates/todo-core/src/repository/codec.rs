//! Persisted Value Mapping
//!
//! JSON encoding of the task list and theme flag. An absent key is not an
//! error: the loaders return `Ok(None)` and the caller picks the default.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::Task;
use super::error::{StoreError, StoreResult};
use super::traits::KeyValueStore;

fn load<S, T>(storage: &S, key: &str) -> StoreResult<Option<T>>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    let Some(raw) = storage.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StoreError::Corrupt { key: key.to_string(), source })
}

fn save<S, T>(storage: &S, key: &str, value: &T) -> StoreResult<()>
where
    S: KeyValueStore + ?Sized,
    T: Serialize + ?Sized,
{
    let json = serde_json::to_string(value)
        .map_err(|source| StoreError::Encode { key: key.to_string(), source })?;
    storage.set(key, &json)
}

pub fn load_tasks<S>(storage: &S, key: &str) -> StoreResult<Option<Vec<Task>>>
where
    S: KeyValueStore + ?Sized,
{
    load(storage, key)
}

pub fn save_tasks<S>(storage: &S, key: &str, tasks: &[Task]) -> StoreResult<()>
where
    S: KeyValueStore + ?Sized,
{
    save(storage, key, tasks)
}

pub fn load_dark_mode<S>(storage: &S, key: &str) -> StoreResult<Option<bool>>
where
    S: KeyValueStore + ?Sized,
{
    load(storage, key)
}

pub fn save_dark_mode<S>(storage: &S, key: &str, dark_mode: bool) -> StoreResult<()>
where
    S: KeyValueStore + ?Sized,
{
    save(storage, key, &dark_mode)
}
