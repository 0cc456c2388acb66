//! Store Configuration
//!
//! Storage keys and the seed list used when nothing has been persisted yet.

use crate::domain::Task;

pub const TODOS_KEY: &str = "todos";
pub const DARK_MODE_KEY: &str = "darkMode";

#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Key holding the JSON task array
    pub todos_key: String,
    /// Key holding the JSON theme boolean
    pub dark_mode_key: String,
    /// Tasks shown on first run
    pub seed: Vec<Task>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            todos_key: TODOS_KEY.to_string(),
            dark_mode_key: DARK_MODE_KEY.to_string(),
            seed: seed_tasks(),
        }
    }
}

/// The first-run example tasks
pub fn seed_tasks() -> Vec<Task> {
    vec![
        Task::new(1, "Learn React Hooks"),
        Task::new(2, "Build a Todo App"),
        Task::new(3, "Practice React skills"),
    ]
}
