//! Application Context
//!
//! The single controller that owns the task store. Provided via the Leptos
//! Context API; every user intent goes through one of its methods, and the
//! signal update at the end of each one re-renders subscribers.

use leptos::prelude::*;
use todo_core::{project, Filter, StoreConfig, TaskId, TaskStore, TodoView};

use crate::storage::{now_millis, LocalStorage};

#[derive(Clone, Copy)]
pub struct TodoContext {
    store: RwSignal<TaskStore<LocalStorage>>,
    /// Projection of the current state, recomputed after each change
    pub view: Memo<TodoView>,
}

impl TodoContext {
    pub fn new(config: StoreConfig) -> Self {
        let store = RwSignal::new(TaskStore::open(LocalStorage, config, now_millis));
        let view = Memo::new(move |_| store.with(|s| project(s.state())));
        Self { store, view }
    }

    pub fn set_input(&self, text: String) {
        self.store.update(|s| s.set_input(text));
    }

    /// Add the input buffer as a new task
    pub fn submit(&self) {
        self.store.update(|s| {
            s.submit_input();
        });
    }

    pub fn delete(&self, id: TaskId) {
        self.store.update(|s| {
            s.delete(id);
        });
    }

    pub fn toggle_complete(&self, id: TaskId) {
        self.store.update(|s| {
            s.toggle_complete(id);
        });
    }

    pub fn begin_edit(&self, id: TaskId, text: String) {
        self.store.update(|s| {
            s.begin_edit(id, text);
        });
    }

    pub fn set_edit_text(&self, text: String) {
        self.store.update(|s| s.set_edit_text(text));
    }

    pub fn save_edit(&self, id: TaskId) {
        self.store.update(|s| {
            s.save_edit(id);
        });
    }

    pub fn set_filter(&self, filter: Filter) {
        self.store.update(|s| s.set_filter(filter));
    }

    pub fn toggle_theme(&self) {
        self.store.update(|s| {
            s.toggle_theme();
        });
    }

    /// Draft text of the task being edited
    pub fn edit_draft(&self) -> String {
        self.store.with(|s| {
            s.state()
                .editing()
                .map(|cursor| cursor.text.clone())
                .unwrap_or_default()
        })
    }
}

/// Get the todo controller from context
pub fn use_todo() -> TodoContext {
    expect_context::<TodoContext>()
}
