#![allow(warnings)]
//! Todo Frontend Entry Point

mod models;
mod config;
mod logger;
mod session;
mod api;
mod routes;
mod scope;
mod board;
mod roadmap;
mod context;
mod store;
mod components;
mod pages;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    logger::init(config.log_level);
    log::info!("todo client starting, api at {}", config.api_url);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
