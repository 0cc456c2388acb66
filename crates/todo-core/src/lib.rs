//! Todo Core
//!
//! Layered the same way as the app:
//! - domain: task record, filter, edit cursor
//! - repository: key-value durability trait and JSON mapping
//! - state: the in-memory state container and its transitions
//! - store: state plus write-through persistence
//! - projection: state snapshot to view model

pub mod config;
pub mod domain;
pub mod projection;
pub mod repository;
pub mod state;
pub mod store;

pub use config::StoreConfig;
pub use domain::{EditCursor, Entity, Filter, Task, TaskId};
pub use projection::{project, FilterButton, RowMode, TaskRow, TodoView};
pub use repository::{KeyValueStore, MemoryStorage, StoreError, StoreResult};
pub use state::TodoState;
pub use store::{Clock, TaskStore};
