//! Visibility Filter
//!
//! A view-time predicate over tasks. Never mutates the list and is never
//! persisted.

use super::task::Task;

/// Which tasks the list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    Completed,
    Pending,
}

impl Filter {
    /// Display order of the filter controls
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Completed, Filter::Pending];

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Completed => "Completed",
            Filter::Pending => "Pending",
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Completed => task.completed,
            Filter::Pending => !task.completed,
        }
    }
}
