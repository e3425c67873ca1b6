pub mod api;
pub mod components;
pub mod config;
pub mod navigation;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test_support;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    run();
}

#[cfg(target_arch = "wasm32")]
pub fn run() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("starting WorkHub frontend");

    // Runtime config load from ./config.json happens before mount; if
    // window.__WORKHUB_ENV is present (env.js), it takes precedence.
    wasm_bindgen_futures::spawn_local(async move {
        config::init().await;
        log::info!("runtime config initialized");
        router::mount_app();
    });
}
