//! Entry point for the WASM application

use entrevistas::{ApiConfig, App};
use leptos::*;

pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Entrevistas - Starting Leptos App");

    if ApiConfig::from_build_env().endpoint().is_err() {
        log::warn!("⚠️  API_URL was not set at build time, uploads will fail");
    }

    mount_to_body(|| view! { <App/> })
}
