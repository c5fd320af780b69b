//! WebAssembly entry point for the blog front end.
//!
//! Hydrates the server-rendered page. Hydration mounts the navigation header,
//! which reads the stored theme from `localStorage` and applies it to the
//! document before the first client render.

#[wasm_bindgen::prelude::wasm_bindgen]
/// Installs browser logging and the panic hook, then hydrates the body.
///
/// `tracing` events from `blog_ui` reach the console through its `log`
/// fallback, so `console_log` is the only logger needed here.
pub fn hydrate() {
    use blog_ui::component;
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::debug!("hydrating blog front end");
    leptos::mount::hydrate_body(component);
}
