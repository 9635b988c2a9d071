//! # folio
//!
//! Leptos + WASM portfolio site: resume, project write-ups, architecture
//! diagrams, and per-domain documentation pages behind client-side routes.
//!
//! Nearly everything here is static content. The stateful pieces live in
//! [`state`]: the persisted light/dark theme store, the scroll-derived
//! floating-control visibility, the route-to-navigation selector, and the
//! table-of-contents scroll-spy. [`components::page_shell`] wires them into
//! the chrome that wraps every routed page.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and the panic hook, then hydrates
/// the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating folio");
    leptos::mount::hydrate_body(app::App);
}
