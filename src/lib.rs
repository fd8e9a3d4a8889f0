#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod constellation;
pub mod contact;
pub mod content;
pub mod motion;
pub mod relay;
pub mod sections;
pub mod skills;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // a second init only happens on hot reload; ignore it
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
