//! Storage Errors

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// No durability backend is reachable (e.g. storage disabled)
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The backend rejected a read or write
    #[error("storage backend error: {0}")]
    Backend(String),

    /// A value exists under `key` but is not a valid record
    #[error("corrupt value under `{key}`: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode value for `{key}`: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
