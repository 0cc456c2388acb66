//! Task Store
//!
//! Owns a [`TodoState`] and mirrors it to a [`KeyValueStore`] after every
//! mutation: the whole task list under the todos key for task operations,
//! the theme flag under the dark-mode key for theme operations.
//! Operations are total; a failed write is logged and the in-memory state
//! stays authoritative.

use log::{debug, error, warn};

use crate::config::StoreConfig;
use crate::domain::{Filter, Task, TaskId};
use crate::repository::{self, KeyValueStore, StoreResult};
use crate::state::TodoState;

/// Millisecond timestamp source used for new task ids
pub type Clock = fn() -> i64;

pub struct TaskStore<S> {
    state: TodoState,
    storage: S,
    config: StoreConfig,
    clock: Clock,
}

impl<S: KeyValueStore> TaskStore<S> {
    /// Load state from `storage`, falling back to the configured seed tasks
    /// and light theme when a key is absent or holds an unreadable value.
    /// Nothing is written until the first mutation.
    pub fn open(storage: S, config: StoreConfig, clock: Clock) -> Self {
        let tasks = load_or(
            repository::load_tasks(&storage, &config.todos_key),
            &config.todos_key,
            || config.seed.clone(),
        );
        let dark_mode = load_or(
            repository::load_dark_mode(&storage, &config.dark_mode_key),
            &config.dark_mode_key,
            || false,
        );
        debug!("[STORE] Opened with {} tasks, dark_mode={}", tasks.len(), dark_mode);
        Self {
            state: TodoState::new(tasks, dark_mode),
            storage,
            config,
            clock,
        }
    }

    pub fn state(&self) -> &TodoState {
        &self.state
    }

    pub fn tasks(&self) -> &[Task] {
        self.state.tasks()
    }

    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.state.visible_tasks()
    }

    pub fn dark_mode(&self) -> bool {
        self.state.dark_mode()
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.state.set_input(text);
    }

    /// Append a task from `text`; blank text changes nothing
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        let id = self.state.add(text, (self.clock)())?;
        debug!("[STORE] Added task {}", id);
        self.persist_tasks();
        Some(id)
    }

    /// Add the current input buffer as a task
    pub fn submit_input(&mut self) -> Option<TaskId> {
        let text = self.state.input().to_string();
        self.add(&text)
    }

    pub fn delete(&mut self, id: TaskId) -> bool {
        let removed = self.state.delete(id);
        debug!("[STORE] Delete task {} (found={})", id, removed);
        self.persist_tasks();
        removed
    }

    pub fn toggle_complete(&mut self, id: TaskId) -> bool {
        let found = self.state.toggle_complete(id);
        debug!("[STORE] Toggle task {} (found={})", id, found);
        self.persist_tasks();
        found
    }

    pub fn begin_edit(&mut self, id: TaskId, text: impl Into<String>) -> bool {
        self.state.begin_edit(id, text)
    }

    pub fn set_edit_text(&mut self, text: impl Into<String>) {
        self.state.set_edit_text(text);
    }

    pub fn save_edit(&mut self, id: TaskId) -> bool {
        let found = self.state.save_edit(id);
        debug!("[STORE] Save edit on task {} (found={})", id, found);
        self.persist_tasks();
        found
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.state.set_filter(filter);
    }

    pub fn toggle_theme(&mut self) -> bool {
        let dark_mode = self.state.toggle_theme();
        debug!("[STORE] Theme dark_mode={}", dark_mode);
        let key = &self.config.dark_mode_key;
        if let Err(e) = repository::save_dark_mode(&self.storage, key, dark_mode) {
            error!("[STORE] Failed to persist theme: {}", e);
        }
        dark_mode
    }

    fn persist_tasks(&self) {
        let key = &self.config.todos_key;
        if let Err(e) = repository::save_tasks(&self.storage, key, self.state.tasks()) {
            error!("[STORE] Failed to persist tasks: {}", e);
        }
    }
}

fn load_or<T>(loaded: StoreResult<Option<T>>, key: &str, default: impl FnOnce() -> T) -> T {
    match loaded {
        Ok(Some(value)) => value,
        Ok(None) => default(),
        Err(e) => {
            warn!("[STORE] Ignoring stored `{}`: {}", key, e);
            default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::seed_tasks;
    use crate::repository::{MemoryStorage, StoreError};
    use std::cell::Cell;

    thread_local! {
        static TICKS: Cell<i64> = const { Cell::new(1_000) };
    }

    fn fixed_clock() -> i64 {
        1_700_000_000_000
    }

    fn ticking_clock() -> i64 {
        TICKS.with(|t| {
            let now = t.get();
            t.set(now + 1);
            now
        })
    }

    fn open(storage: &MemoryStorage) -> TaskStore<MemoryStorage> {
        TaskStore::open(storage.clone(), StoreConfig::default(), fixed_clock)
    }

    /// Storage that refuses every write
    struct ReadOnly;

    impl KeyValueStore for ReadOnly {
        fn get(&self, _key: &str) -> StoreResult<Option<String>> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> StoreResult<()> {
            Err(StoreError::Backend("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_open_empty_storage_uses_defaults_without_writing() {
        let storage = MemoryStorage::new();
        let store = open(&storage);
        assert_eq!(store.tasks(), seed_tasks().as_slice());
        assert!(!store.dark_mode());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_open_reads_persisted_values() {
        let storage = MemoryStorage::with_entries([
            ("todos", r#"[{"id":5,"text":"saved","completed":true}]"#),
            ("darkMode", "true"),
        ]);
        let store = open(&storage);
        assert_eq!(store.tasks(), &[Task { id: 5, text: "saved".into(), completed: true }]);
        assert!(store.dark_mode());
    }

    #[test]
    fn test_open_empty_array_is_not_seeded() {
        let storage = MemoryStorage::with_entries([("todos", "[]")]);
        let store = open(&storage);
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn test_open_corrupt_values_fall_back() {
        let storage = MemoryStorage::with_entries([
            ("todos", "{broken"),
            ("darkMode", "\"yes\""),
        ]);
        let store = open(&storage);
        assert_eq!(store.tasks(), seed_tasks().as_slice());
        assert!(!store.dark_mode());
        assert_eq!(storage.raw("todos").as_deref(), Some("{broken"));
    }

    #[test]
    fn test_blank_add_does_not_write() {
        let storage = MemoryStorage::new();
        let mut store = open(&storage);
        assert_eq!(store.add("   "), None);
        assert!(storage.raw("todos").is_none());
    }

    #[test]
    fn test_add_persists_whole_list() {
        let storage = MemoryStorage::new();
        let mut store = open(&storage);
        store.add("buy milk");
        let saved = repository::load_tasks(&storage, "todos").unwrap().unwrap();
        assert_eq!(saved, store.tasks());
        assert_eq!(saved.len(), 4);
        assert_eq!(saved[3].id, fixed_clock());
    }

    #[test]
    fn test_submit_input_uses_buffer() {
        let storage = MemoryStorage::new();
        let mut store = open(&storage);
        store.set_input("from the field");
        assert!(store.submit_input().is_some());
        assert_eq!(store.tasks().last().unwrap().text, "from the field");
        assert_eq!(store.state().input(), "");
    }

    #[test]
    fn test_ticking_clock_gives_distinct_ids() {
        let mut store =
            TaskStore::open(MemoryStorage::new(), StoreConfig::default(), ticking_clock);
        let a = store.add("a").unwrap();
        let b = store.add("b").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_add_after_stored_max_id() {
        let storage = MemoryStorage::with_entries([(
            "todos",
            r#"[{"id":9223372036854775807,"text":"max","completed":false}]"#,
        )]);
        let mut store = open(&storage);
        let id = store.add("next").unwrap();
        assert_eq!(id, fixed_clock());
        let saved = repository::load_tasks(&storage, "todos").unwrap().unwrap();
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[1].id, fixed_clock());
    }

    #[test]
    fn test_visible_tasks_follow_filter() {
        let mut store = open(&MemoryStorage::new());
        store.toggle_complete(2);

        store.set_filter(Filter::Completed);
        let ids: Vec<TaskId> = store.visible_tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2]);

        store.set_filter(Filter::Pending);
        let ids: Vec<TaskId> = store.visible_tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);

        store.set_filter(Filter::All);
        assert_eq!(store.visible_tasks().len(), 3);
        assert_eq!(store.tasks().len(), 3);
    }

    #[test]
    fn test_task_mutations_persist() {
        let storage = MemoryStorage::new();
        let mut store = open(&storage);

        store.toggle_complete(2);
        let saved = repository::load_tasks(&storage, "todos").unwrap().unwrap();
        assert!(saved[1].completed);

        store.begin_edit(1, "Learn Leptos");
        store.save_edit(1);
        let saved = repository::load_tasks(&storage, "todos").unwrap().unwrap();
        assert_eq!(saved[0].text, "Learn Leptos");

        store.delete(3);
        let saved = repository::load_tasks(&storage, "todos").unwrap().unwrap();
        assert_eq!(saved.len(), 2);
    }

    #[test]
    fn test_view_state_changes_do_not_write() {
        let storage = MemoryStorage::new();
        let mut store = open(&storage);
        store.set_filter(Filter::Pending);
        store.begin_edit(1, "draft");
        store.set_edit_text("draft 2");
        store.set_input("typing");
        assert!(storage.is_empty());
    }

    #[test]
    fn test_theme_persisted_separately() {
        let storage = MemoryStorage::new();
        let mut store = open(&storage);
        assert!(store.toggle_theme());
        assert_eq!(storage.raw("darkMode").as_deref(), Some("true"));
        assert!(storage.raw("todos").is_none());
    }

    #[test]
    fn test_failed_writes_keep_memory_state() {
        let mut store = TaskStore::open(ReadOnly, StoreConfig::default(), fixed_clock);
        assert!(store.add("still here").is_some());
        assert!(store.toggle_theme());
        assert_eq!(store.tasks().len(), 4);
        assert!(store.dark_mode());
    }

    #[test]
    fn test_custom_keys() {
        let storage = MemoryStorage::new();
        let config = StoreConfig {
            todos_key: "app.todos".to_string(),
            dark_mode_key: "app.dark".to_string(),
            seed: Vec::new(),
        };
        let mut store = TaskStore::open(storage.clone(), config, fixed_clock);
        assert!(store.tasks().is_empty());
        store.add("x");
        store.toggle_theme();
        assert!(storage.raw("app.todos").is_some());
        assert_eq!(storage.raw("app.dark").as_deref(), Some("true"));
        assert!(storage.raw("todos").is_none());
    }
}
