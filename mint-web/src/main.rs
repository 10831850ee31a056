//! NFT Mint dApp
//!
//! Browser front end for a collection contract: connect an injected wallet,
//! show supply and sale status, submit mint transactions.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    log::info!("Mint dApp starting...");

    let config_error = match utils::config::init_config() {
        Ok(()) => None,
        Err(e) => {
            log::error!("Falling back to default collection config: {}", e);
            Some(e.user_message())
        }
    };

    hide_loading_screen();

    leptos::mount::mount_to_body(move || view! { <App config_error=config_error/> });
}

/// Hide the static loading element shipped in `index.html`.
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available");
        return;
    };

    match document.get_element_by_id("leptos-loading") {
        Some(loading_element) => {
            if let Err(e) = loading_element.set_attribute("style", "display: none !important;") {
                log::warn!("Failed to hide loading screen: {:?}", e);
            }
        }
        None => log::debug!("Loading element not found"),
    }
}
