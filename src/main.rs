//! SeedSync Frontend Entry Point

mod models;
mod commands;
mod context;
mod store;
mod components;
mod logging;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = logging::init() {
        web_sys::console::warn_1(&format!("logger already installed: {}", e).into());
    }
    mount_to_body(App);
}
