//! Todo App
//!
//! Root component: creates the controller, provides it to children and
//! mirrors the theme onto `<body>`.

use leptos::prelude::*;

use crate::components::{FilterBar, Header, NewTaskForm, TaskList};
use crate::config::AppConfig;
use crate::context::TodoContext;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let ctx = TodoContext::new(config.store);
    provide_context(ctx);

    Effect::new(move |_| {
        let class = ctx.view.with(|v| v.body_class());
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        match body {
            Some(body) => body.set_class_name(class),
            None => log::warn!("[APP] No <body> to apply theme class {}", class),
        }
    });

    view! {
        <div class="todo-container">
            <Header title=config.title />
            <NewTaskForm />
            <FilterBar />
            <TaskList />
        </div>
    }
}
