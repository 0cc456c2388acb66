//! Header Component
//!
//! Title and the theme toggle.

use leptos::prelude::*;

use crate::context::use_todo;

#[component]
pub fn Header(title: &'static str) -> impl IntoView {
    let ctx = use_todo();

    view! {
        <div class="header">
            <h1>{title}</h1>
            // Shows the icon of the theme a click switches to
            <button class="dark-mode-btn" on:click=move |_| ctx.toggle_theme()>
                {move || ctx.view.with(|v| v.theme_icon())}
            </button>
        </div>
    }
}
