use std::cell::Cell;

use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use super::dom::DomElement;
use crate::domain::alert::error::AlertError;
use crate::ports::{ModalPort, ModalToolkitPort};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "bootstrap.Modal")]
    #[derive(Clone, Debug)]
    type Modal;

    #[wasm_bindgen(constructor, js_class = "bootstrap.Modal")]
    fn new(element: &Element) -> Modal;

    #[wasm_bindgen(method)]
    fn show(this: &Modal);

    #[wasm_bindgen(method)]
    fn hide(this: &Modal);
}

/// Entry point to Bootstrap's modal widget.
#[derive(Debug, Clone, Copy)]
pub struct BootstrapToolkit;

impl BootstrapToolkit {
    pub fn new() -> Self {
        Self
    }

    /// Whether the `bootstrap` global is present on this page.
    pub fn is_loaded() -> bool {
        Reflect::has(&js_sys::global(), &JsValue::from_str("bootstrap")).unwrap_or(false)
    }
}

impl Default for BootstrapToolkit {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalToolkitPort<DomElement> for BootstrapToolkit {
    type Modal = BootstrapModal;

    fn attach(&self, container: &DomElement) -> Result<BootstrapModal, AlertError> {
        // Detect the missing toolkit up front; constructing the binding
        // without it would throw an opaque ReferenceError from the glue.
        if !Self::is_loaded() {
            return Err(AlertError::ToolkitUnavailable);
        }
        Ok(BootstrapModal {
            modal: Modal::new(container.raw()),
            shown: Cell::new(false),
        })
    }
}

/// A `bootstrap.Modal` instance bound to one container element.
///
/// Bootstrap exposes no public visibility getter, so the last requested
/// state is tracked locally.
#[derive(Debug)]
pub struct BootstrapModal {
    modal: Modal,
    shown: Cell<bool>,
}

impl ModalPort for BootstrapModal {
    fn show(&self) {
        self.modal.show();
        self.shown.set(true);
    }

    fn hide(&self) {
        self.modal.hide();
        self.shown.set(false);
    }

    fn is_visible(&self) -> bool {
        self.shown.get()
    }
}
