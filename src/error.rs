use thiserror::Error;
use wasm_bindgen::JsValue;

/// Reasons the page interaction layer could not be installed.
#[derive(Debug, Error)]
pub enum BindError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for BindError {
    fn from(value: JsValue) -> Self {
        BindError::Dom(describe_js(&value))
    }
}

/// Best-effort text for a thrown JS value.
pub fn describe_js(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
