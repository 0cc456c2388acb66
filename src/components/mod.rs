//! UI Components
//!
//! Leptos components rendering the todo view model.

mod filter_bar;
mod header;
mod new_task_form;
mod task_item;
mod task_list;

pub use filter_bar::FilterBar;
pub use header::Header;
pub use new_task_form::NewTaskForm;
pub use task_item::TaskItem;
pub use task_list::TaskList;
