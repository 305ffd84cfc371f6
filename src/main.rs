//! Party Planner Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod form;
mod models;
mod planner;
mod prompt;
mod store;
mod view_model;

use app::App;
use config::Config;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = Config::load();
    _ = console_log::init_with_level(config.log_level);
    log::info!("party planner using {}", config.api.root());

    let api = config.api;
    mount_to_body(move || view! { <App api=api /> });
}
