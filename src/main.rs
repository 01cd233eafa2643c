#![allow(warnings)]
//! NoteHub Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod debounce;
mod models;
mod query;
mod store;
mod validation;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

/// Print buffered log lines before the panic message
fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        for line in rolling_logger::recent() {
            web_sys::console::log_1(&line.into());
        }
        console_error_panic_hook::hook(info);
    }));
}

fn main() {
    install_panic_hook();

    let config = AppConfig::from_env();
    if let Err(err) = rolling_logger::init(config.log_level, rolling_logger::DEFAULT_CAPACITY) {
        web_sys::console::warn_1(&format!("[APP] logger already set: {}", err).into());
    }
    log::info!("[APP] starting, api {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config /> });
}
