//! Partnership AI Web App (Leptos + WASM)

mod app;
mod bindings;
mod components;
mod download;
mod runtime;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    init_logging();
    log::info!("Initializing Partnership AI application...");
    leptos::mount::mount_to_body(app::App);
}

/// console_log を登録。既にロガーがある場合は警告のみ出して false
fn init_logging() -> bool {
    match console_log::init_with_level(log::Level::Debug) {
        Ok(()) => true,
        Err(e) => {
            web_sys::console::warn_1(&format!("console_log init failed: {}", e).into());
            false
        }
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_second_logger_init_warns_instead_of_failing() {
        init_logging();
        assert!(!init_logging());
        assert_eq!(log::max_level(), log::LevelFilter::Debug);
    }
}
