//! Errors raised while binding the validator to the page

use landing_form_core::ConfigError;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum BindError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("element #{0} not found")]
    MissingElement(String),

    #[error("element #{id} is not a {expected}")]
    WrongElement { id: String, expected: &'static str },

    #[error("invalid options: {0}")]
    InvalidOptions(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl BindError {
    pub(crate) fn dom(value: JsValue) -> Self {
        BindError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<serde_wasm_bindgen::Error> for BindError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        BindError::InvalidOptions(err.to_string())
    }
}

impl From<BindError> for JsValue {
    fn from(err: BindError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
