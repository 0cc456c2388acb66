//! Todo State
//!
//! The explicit state container: task list, filter, edit cursor, input
//! buffer and theme flag. Transitions here are pure; persistence is layered
//! on top by [`TaskStore`](crate::store::TaskStore).

use crate::domain::{entity, EditCursor, Filter, Task, TaskId};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TodoState {
    tasks: Vec<Task>,
    filter: Filter,
    editing: Option<EditCursor>,
    input: String,
    dark_mode: bool,
}

impl TodoState {
    pub fn new(tasks: Vec<Task>, dark_mode: bool) -> Self {
        Self {
            tasks,
            dark_mode,
            ..Default::default()
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn editing(&self) -> Option<&EditCursor> {
        self.editing.as_ref()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Tasks passing the current filter, in list order
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| self.filter.matches(task)).collect()
    }

    /// Id for a task created at `now`; bumped past the largest existing id
    /// when the clock has not advanced. If that id is `i64::MAX`, the first
    /// free id at or below `now` is used instead.
    pub fn next_id(&self, now: TaskId) -> TaskId {
        match entity::max_id(&self.tasks) {
            Some(max) if now <= max => max
                .checked_add(1)
                .unwrap_or_else(|| self.free_id_below(now)),
            _ => now,
        }
    }

    fn free_id_below(&self, start: TaskId) -> TaskId {
        // At most `tasks.len()` ids are taken, so the scan ends quickly
        (TaskId::MIN..=start)
            .rev()
            .find(|id| self.find(*id).is_none())
            .unwrap_or(TaskId::MIN)
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Append a pending task unless `text` is blank. Clears the input buffer
    /// on success.
    pub fn add(&mut self, text: &str, now: TaskId) -> Option<TaskId> {
        if text.trim().is_empty() {
            return None;
        }
        let id = self.next_id(now);
        self.tasks.push(Task::new(id, text));
        self.input.clear();
        Some(id)
    }

    /// Remove the task with `id`. Clears the edit cursor if it pointed there.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.editing.as_ref().is_some_and(|cursor| cursor.id == id) {
            self.editing = None;
        }
        self.tasks.len() != before
    }

    pub fn toggle_complete(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.toggle();
                true
            }
            None => false,
        }
    }

    /// Point the edit cursor at `id`, replacing any previous cursor.
    /// Ignored when no such task exists.
    pub fn begin_edit(&mut self, id: TaskId, text: impl Into<String>) -> bool {
        if self.find(id).is_none() {
            return false;
        }
        self.editing = Some(EditCursor::new(id, text));
        true
    }

    /// Update the draft text of the task being edited
    pub fn set_edit_text(&mut self, text: impl Into<String>) {
        if let Some(cursor) = self.editing.as_mut() {
            cursor.text = text.into();
        }
    }

    /// Write the cursor's draft into task `id` and clear the cursor.
    /// Empty text is accepted.
    pub fn save_edit(&mut self, id: TaskId) -> bool {
        let draft = self.editing.take().map(|cursor| cursor.text).unwrap_or_default();
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.text = draft;
                true
            }
            None => false,
        }
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn toggle_theme(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }
}
