//! Task Entity
//!
//! A single to-do entry. Serialized exactly as it is persisted under the
//! `"todos"` key: `{ "id": number, "text": string, "completed": bool }`.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Task identifier, a creation timestamp in milliseconds
pub type TaskId = i64;

/// A to-do entry
///
/// All three fields are required when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier within the list
    pub id: TaskId,
    /// Task text, stored as entered
    pub text: String,
    /// Completion status
    pub completed: bool,
}

impl Task {
    /// Create a new pending task
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

impl Entity for Task {
    type Id = TaskId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// The at-most-one task being edited inline, plus its draft text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCursor {
    pub id: TaskId,
    pub text: String,
}

impl EditCursor {
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self { id, text: text.into() }
    }
}
