//! Checklist Frontend Entry Point

mod app;
mod checklists;
mod components;
mod config;
mod confirm;
mod logger;
mod models;
mod session;
mod storage;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use storage::LocalStorage;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);

    let config = AppConfig::load(&LocalStorage);
    logger::init(config.level_filter());

    mount_to_body(move || view! { <App config=config /> });
}
