//! SCINEX Frontend Entry Point

mod models;
mod error;
mod config;
mod context;
mod commands;
mod routes;
mod signup_form;
mod composer;
mod components;
mod pages;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = AppConfig::load();
    let config = loaded.as_ref().ok().cloned().unwrap_or_default();
    wasm_logger::init(wasm_logger::Config::new(config.log_level()));
    if let Err(e) = &loaded {
        log::warn!("[config] {}, using defaults", e);
    }
    log::info!("[app] starting {}", config.brand);

    mount_to_body(move || view! { <App config=config /> });
}
