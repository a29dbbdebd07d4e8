//! Errors raised by the browser glue. The game model itself never fails.

use derive_more::{Display, Error, From};
use wasm_bindgen::JsValue;

#[derive(Debug, Display, Error, From)]
pub enum AppError {
    #[display("invalid config: {_0}")]
    Config(serde_json::Error),
    #[display("canvas unavailable: {_0}")]
    #[from(ignore)]
    Canvas(#[error(not(source))] String),
    #[display("DOM call failed: {_0}")]
    #[from(ignore)]
    Dom(#[error(not(source))] String),
}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        AppError::Dom(format!("{value:?}"))
    }
}
