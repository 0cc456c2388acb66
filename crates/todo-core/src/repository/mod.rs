//! Repository Layer
//!
//! Durability abstraction and the JSON mapping of persisted values.
//!
//! Structure:
//! - traits: the key-value durability contract
//! - error: storage error type
//! - memory: in-memory backend
//! - codec: load/save of the task list and theme flag

mod codec;
mod error;
mod memory;
mod traits;

pub use codec::{load_dark_mode, load_tasks, save_dark_mode, save_tasks};
pub use error::{StoreError, StoreResult};
pub use memory::MemoryStorage;
pub use traits::KeyValueStore;
