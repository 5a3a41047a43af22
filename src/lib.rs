pub mod api;
pub mod app;
pub mod components;
#[cfg(feature = "ssr")]
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod presenter;
#[cfg(feature = "ssr")]
pub mod remote;
#[cfg(feature = "ssr")]
pub mod source;
pub mod store;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    leptos::mount_to_body(App);
}
