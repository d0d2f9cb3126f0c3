#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

// Modules
mod components;
mod errors;
mod services;
mod stores;
mod utils;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting copy page handler");

    // Attach once at load; the listener lives for the rest of the page
    #[cfg(target_arch = "wasm32")]
    {
        let settings = stores::settings_store::load_settings();
        if let Err(e) = components::dom::install(settings) {
            log::error!("Failed to install copy page handler: {}", e);
        }
    }
}
