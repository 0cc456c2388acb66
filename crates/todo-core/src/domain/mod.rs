//! Domain Layer
//!
//! Task records, the view filter and the edit cursor.
//! No browser or storage dependencies live here.

pub(crate) mod entity;
mod filter;
mod task;

pub use entity::Entity;
pub use filter::Filter;
pub use task::{EditCursor, Task, TaskId};
