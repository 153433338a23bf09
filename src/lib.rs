#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

pub mod shader;
pub mod splash;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    pub mod app;
    pub mod render;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        app::start()
    }
}

// When compiling for non-wasm targets (e.g., `cargo test` on host),
// provide an empty stub so the crate still builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
