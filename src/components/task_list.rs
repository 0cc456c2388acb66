//! Task List Component
//!
//! Visible rows, or the empty-state message when there are no tasks at all.

use leptos::prelude::*;
use todo_core::projection::EMPTY_MESSAGE;

use crate::components::TaskItem;
use crate::context::use_todo;

#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_todo();

    view! {
        <Show
            when=move || !ctx.view.with(|v| v.show_empty_message)
            fallback=|| view! { <p class="empty-message">{EMPTY_MESSAGE}</p> }
        >
            <ul class="todo-list">
                // Keyed on everything but the edit draft, so typing in the
                // inline editor does not rebuild (and unfocus) its row
                <For
                    each=move || ctx.view.with(|v| v.rows.clone())
                    key=|row| (row.id, row.text.clone(), row.completed, row.is_editing())
                    children=move |row| view! { <TaskItem row=row /> }
                />
            </ul>
        </Show>
    }
}
