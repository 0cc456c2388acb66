//! App Configuration

use log::LevelFilter;
use todo_core::StoreConfig;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Heading shown above the list
    pub title: &'static str,
    /// Most verbose level forwarded to the browser console
    pub log_level: LevelFilter,
    /// Storage keys and first-run tasks
    pub store: StoreConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Enhanced Todo List",
            log_level: if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info },
            store: StoreConfig::default(),
        }
    }
}
