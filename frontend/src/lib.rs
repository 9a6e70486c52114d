#![recursion_limit = "256"]

// Hydrates the server rendered landing page, this is what wires the scroll
// button to the callback provided by the home page.
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
