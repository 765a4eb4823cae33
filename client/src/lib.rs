//! # despacho-web
//!
//! Leptos frontend for the studio site: landing page, filterable project
//! gallery with a detail modal, and the contact form.
//!
//! The crate compiles twice. With `ssr` it is linked into `despacho-server`
//! for server rendering; with `hydrate` it is built to WASM and takes over
//! the server-rendered markup in the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
