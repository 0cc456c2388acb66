//! Todo Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod logging;
mod storage;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::default();
    logging::init(config.log_level);
    log::info!("[APP] Starting {}", config.title);
    mount_to_body(move || view! { <App config=config /> });
}
