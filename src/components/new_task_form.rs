//! New Task Form Component

use leptos::prelude::*;

use crate::context::use_todo;

/// Input field plus "Add" submit for new tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_todo();

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    view! {
        <form class="todo-form" on:submit=add_task>
            <input
                type="text"
                class="todo-input"
                placeholder="Add a new task..."
                prop:value=move || ctx.view.with(|v| v.input.clone())
                on:input=move |ev| ctx.set_input(event_target_value(&ev))
            />
            <button type="submit" class="add-btn">"Add"</button>
        </form>
    }
}
