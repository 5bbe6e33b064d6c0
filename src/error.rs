//! Error types for page binding

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Main error type for binding operations
#[derive(Error, Debug)]
pub enum BindError {
    #[error("Failed to parse binder config: {0}")]
    ConfigJson(#[from] serde_json::Error),

    #[error("Failed to read binder config value: {0}")]
    ConfigValue(#[from] serde_wasm_bindgen::Error),

    #[error("Invalid binder config: {0}")]
    InvalidConfig(String),

    #[error("DOM operation failed: {0}")]
    Dom(String),

    #[error("No document available on the global window")]
    NoDocument,
}

impl From<JsValue> for BindError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        BindError::Dom(message)
    }
}

/// Result type for binding operations
pub type BindResult<T> = Result<T, BindError>;
