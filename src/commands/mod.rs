//! Host Command Wrappers
//!
//! Frontend bindings to commands exposed by the hosting shell.

mod files;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> JsValue;
}

pub use files::*;
