//! WASM bindings for browser-based conversion.
//!
//! The browser build never reaches the network from Rust; the bundled script
//! is always the placeholder.

use wasm_bindgen::prelude::*;

use crate::{ConversionProgress, ConvertConfig, Converter};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Convert an EPUB to a viewer archive.
///
/// Takes raw EPUB bytes and the file's display name and returns the zip
/// bytes. The name is only used for validation and logging.
#[wasm_bindgen]
pub fn convert_epub(data: &[u8], name: &str) -> Result<Vec<u8>, JsValue> {
    crate::validate_source_name(name).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let converter = Converter::offline().with_config(ConvertConfig::default().offline().with_parallel(false));
    let archive = converter
        .convert(data, name, &mut |_: ConversionProgress| {})
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    Ok(archive.bytes)
}

/// Output file name for a source display name.
#[wasm_bindgen]
pub fn output_name(name: &str) -> String {
    crate::output_name(name)
}
