#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod content;
pub mod motion;
#[cfg(feature = "ssr")]
pub mod server;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // already set when the bundle is hot reloaded
    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("hydrating");
    leptos::mount::hydrate_body(App);
}
