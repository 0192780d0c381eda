//! Asset Tracker Frontend Entry Point

mod app;
mod browser;
mod components;
mod context;
mod store;

use app::{App, ConfigErrorNotice};
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    let logger = match rolling_logger::init(
        rolling_logger::DEFAULT_CAPACITY,
        level,
        Some(browser::console::sink as rolling_logger::Sink),
    ) {
        Ok(logger) => Some(logger),
        Err(e) => {
            web_sys::console::warn_1(&format!("logger already installed: {}", e).into());
            None
        }
    };

    let config = match browser::page::read_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("[CONFIG] {}", e);
            let message = e.to_string();
            mount_to_body(move || view! { <ConfigErrorNotice message=message /> });
            return;
        }
    };
    browser::legacy::seed_from_page(&config);

    mount_to_body(move || view! { <App config=config logger=logger /> });
}
