use crate::domain::alert::error::AlertError;
use wasm_bindgen::JsValue;

/// Conversion from AlertError to JsValue for the WASM boundary
impl From<AlertError> for JsValue {
    fn from(error: AlertError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}
