//! Task Item Component
//!
//! A single row: checkbox, text or inline editor, edit/save and delete.

use leptos::prelude::*;
use todo_core::TaskRow;

use crate::context::use_todo;

#[component]
pub fn TaskItem(row: TaskRow) -> impl IntoView {
    let ctx = use_todo();

    let id = row.id;
    let completed = row.completed;
    let editing = row.is_editing();
    let text = row.text;

    let text_view = if editing {
        view! {
            <input
                type="text"
                class="edit-input"
                prop:value=move || ctx.edit_draft()
                on:input=move |ev| ctx.set_edit_text(event_target_value(&ev))
            />
        }.into_any()
    } else {
        view! {
            <span class={if completed { "completed" } else { "" }}>{text.clone()}</span>
        }.into_any()
    };

    let action = if editing {
        view! {
            <button class="save-btn" on:click=move |_| ctx.save_edit(id)>"💾"</button>
        }.into_any()
    } else {
        view! {
            <button class="edit-btn" on:click=move |_| ctx.begin_edit(id, text.clone())>
                "✏️"
            </button>
        }.into_any()
    };

    view! {
        <li class="todo-item">
            <input
                type="checkbox"
                prop:checked=completed
                on:change=move |_| ctx.toggle_complete(id)
            />
            {text_view}
            {action}
            <button class="delete-btn" on:click=move |_| ctx.delete(id)>"🗑️"</button>
        </li>
    }
}
