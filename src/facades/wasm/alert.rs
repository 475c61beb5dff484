use crate::adapters::wasm::{BootstrapModal, BootstrapToolkit, DomDocument, DomElement};
use crate::domain::alert::error::AlertError;
use crate::domain::alert::types::{AlertBinding, AlertOptions};
use crate::domain::alert::operations;
use crate::platform::Platform;
use wasm_bindgen::prelude::*;

/// JS-facing alert dialog bound to a Bootstrap modal container.
///
/// ```js
/// const alert = new AlertModal("#alertBox");
/// alert.show("Save failed");
/// ```
#[wasm_bindgen]
pub struct AlertModal {
    binding: AlertBinding<DomElement, BootstrapModal>,
}

#[wasm_bindgen]
impl AlertModal {
    /// Binds to the container matching `selector`, with the conventional
    /// `.modal-body` message region.
    #[wasm_bindgen(constructor)]
    pub fn new(selector: &str) -> Result<AlertModal, JsValue> {
        Self::bind(selector, AlertOptions::default())
    }

    /// Binds with a JS options object, e.g. `{ bodySelector: ".toast-text" }`.
    #[wasm_bindgen(js_name = withOptions)]
    pub fn with_options(selector: &str, options: JsValue) -> Result<AlertModal, JsValue> {
        let options: AlertOptions = serde_wasm_bindgen::from_value(options)
            .map_err(|e| AlertError::js_error(e.to_string()))?;
        Self::bind(selector, options)
    }

    /// Sets the message body to `message` (displayed as plain text) and
    /// triggers the modal's show transition.
    pub fn show(&self, message: &str) -> Result<(), JsValue> {
        let platform = Platform::new();
        operations::show(&platform, &self.binding, message).map_err(JsValue::from)
    }
}

impl AlertModal {
    fn bind(selector: &str, options: AlertOptions) -> Result<AlertModal, JsValue> {
        let platform = Platform::new();
        let document = DomDocument::new()?;
        let toolkit = BootstrapToolkit::new();

        let binding = operations::bind(&platform, &document, &toolkit, selector, options)?;
        Ok(AlertModal { binding })
    }
}
