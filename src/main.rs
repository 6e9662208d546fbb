//! Simple To-Do Frontend Entry Point

mod models;
mod error;
mod config;
mod logger;
mod id;
mod todo_list;
mod storage;
mod context;
mod store;
mod components;
mod app;

use app::App;
use config::WidgetConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = logger::init_with_config(WidgetConfig::from_document);
    log::info!("[APP] starting with storage key {:?}", config.storage_key);

    mount_to_body(move || view! { <App config=config /> });
}
