//! Filter Bar Component
//!
//! One button per filter; the active one is highlighted.

use leptos::prelude::*;

use crate::context::use_todo;

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_todo();
    let buttons = ctx.view.with_untracked(|v| v.filters);

    view! {
        <div class="filter-buttons">
            {buttons.into_iter().enumerate().map(|(idx, button)| {
                let filter = button.filter;
                let is_active = move || ctx.view.with(|v| v.filters[idx].active);
                view! {
                    <button
                        class=move || if is_active() { "active" } else { "" }
                        on:click=move |_| ctx.set_filter(filter)
                    >
                        {button.label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
