#[cfg(feature = "console_error_panic_hook")]
extern crate console_error_panic_hook;

// Hexagonal architecture modules
pub mod domain;
pub mod ports;
pub mod adapters;
pub mod platform;
pub mod facades;

pub mod measure;

// Re-exports for consumers and tests
pub use domain::alert::{AlertError, AlertOptions, DEFAULT_BODY_SELECTOR};
pub use platform::Platform;

#[cfg(target_arch = "wasm32")]
pub use facades::wasm::AlertModal;
#[cfg(not(target_arch = "wasm32"))]
pub use facades::native::AlertNotifier;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start_app() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    Ok(())
}
