//! View Projection
//!
//! Pure mapping from a [`TodoState`] snapshot to what the UI shows.
//! Recomputed on every render; holds no state of its own.

use crate::domain::{Filter, TaskId};
use crate::state::TodoState;

pub const EMPTY_MESSAGE: &str = "No tasks yet. Add one above!";

/// How a task's text is shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowMode {
    /// Plain label with an edit action
    Display,
    /// Inline text field bound to the edit draft, with a save action
    Editing { draft: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub mode: RowMode,
}

impl TaskRow {
    pub fn is_editing(&self) -> bool {
        matches!(self.mode, RowMode::Editing { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterButton {
    pub filter: Filter,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoView {
    pub input: String,
    pub rows: Vec<TaskRow>,
    pub filters: [FilterButton; 3],
    pub dark_mode: bool,
    pub show_empty_message: bool,
}

impl TodoView {
    /// Icon of the theme the toggle switches to
    pub fn theme_icon(&self) -> &'static str {
        theme_icon(self.dark_mode)
    }

    pub fn body_class(&self) -> &'static str {
        body_class(self.dark_mode)
    }
}

pub fn theme_icon(dark_mode: bool) -> &'static str {
    if dark_mode { "🔆" } else { "🌙" }
}

pub fn body_class(dark_mode: bool) -> &'static str {
    if dark_mode { "dark-mode" } else { "light-mode" }
}

pub fn project(state: &TodoState) -> TodoView {
    let editing = state.editing();
    let rows = state
        .visible_tasks()
        .into_iter()
        .map(|task| {
            let mode = match editing {
                Some(cursor) if cursor.id == task.id => RowMode::Editing {
                    draft: cursor.text.clone(),
                },
                _ => RowMode::Display,
            };
            TaskRow {
                id: task.id,
                text: task.text.clone(),
                completed: task.completed,
                mode,
            }
        })
        .collect();

    let filters = Filter::ALL.map(|filter| FilterButton {
        filter,
        label: filter.label(),
        active: state.filter() == filter,
    });

    TodoView {
        input: state.input().to_string(),
        rows,
        filters,
        dark_mode: state.dark_mode(),
        // The empty message tracks the whole list, not the filtered view
        show_empty_message: state.tasks().is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::seed_tasks;

    #[test]
    fn test_rows_follow_visible_tasks() {
        let mut state = TodoState::new(seed_tasks(), false);
        state.toggle_complete(2);
        state.set_filter(Filter::Pending);
        let view = project(&state);
        let ids: Vec<TaskId> = view.rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(view.rows.iter().all(|r| r.mode == RowMode::Display));
    }

    #[test]
    fn test_only_cursor_row_is_editing() {
        let mut state = TodoState::new(seed_tasks(), false);
        state.begin_edit(2, "Build a Todo App");
        state.set_edit_text("Build two");
        let view = project(&state);
        assert!(!view.rows[0].is_editing());
        assert_eq!(view.rows[1].mode, RowMode::Editing { draft: "Build two".to_string() });
        assert_eq!(view.rows[1].text, "Build a Todo App");
        assert!(!view.rows[2].is_editing());
    }

    #[test]
    fn test_filter_buttons_highlight_active() {
        let mut state = TodoState::default();
        state.set_filter(Filter::Completed);
        let view = project(&state);
        let labels: Vec<&str> = view.filters.iter().map(|b| b.label).collect();
        assert_eq!(labels, vec!["All", "Completed", "Pending"]);
        let active: Vec<bool> = view.filters.iter().map(|b| b.active).collect();
        assert_eq!(active, vec![false, true, false]);
    }

    #[test]
    fn test_theme_affordance_shows_opposite() {
        let mut state = TodoState::default();
        assert_eq!(project(&state).theme_icon(), "🌙");
        assert_eq!(project(&state).body_class(), "light-mode");
        state.toggle_theme();
        assert_eq!(project(&state).theme_icon(), "🔆");
        assert_eq!(project(&state).body_class(), "dark-mode");
    }

    #[test]
    fn test_empty_message_tracks_whole_list() {
        let mut state = TodoState::new(seed_tasks(), false);
        state.set_filter(Filter::Completed);
        let view = project(&state);
        assert!(view.rows.is_empty());
        assert!(!view.show_empty_message);

        let view = project(&TodoState::default());
        assert!(view.show_empty_message);
    }

    #[test]
    fn test_input_buffer_is_projected() {
        let mut state = TodoState::default();
        state.set_input("half typed");
        assert_eq!(project(&state).input, "half typed");
    }
}
