//! File Commands
//!
//! Frontend bindings for the file list served by the host.

use wasm_bindgen::prelude::*;
use crate::models::ViewFile;
use super::invoke;

/// Fetch every file the host currently tracks
pub async fn list_view_files() -> Result<Vec<ViewFile>, String> {
    let result = invoke("list_view_files", JsValue::NULL).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
