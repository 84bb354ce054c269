//! WebAssembly exports.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. Images cross
//! the boundary as flat interleaved RGB bytes (length = width * height * 3).

use wasm_bindgen::prelude::*;

use crate::config::{EngineOptions, FilterKind};
use crate::engine::FilterEngine;
use crate::errors::FilterError;
use crate::raster::Raster;

/// Apply a filter selected by name to a flat RGB buffer.
///
/// # Arguments
/// * `data` - Flat array of RGB bytes (length = width * height * 3)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `name` - Filter name, case-insensitive ("Grayscale", "Blur", ...)
///
/// # Returns
/// Flat array of filtered RGB bytes, or an error string for unknown names
/// and mismatched buffer sizes
#[wasm_bindgen]
pub fn apply_filter_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    name: &str,
) -> Result<Vec<u8>, JsValue> {
    let kind: FilterKind = name
        .parse()
        .map_err(|e: FilterError| JsValue::from_str(&e.to_string()))?;

    let mut raster = Raster::from_shape_vec(height, width, data.to_vec())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    // No rayon worker threads on wasm32
    FilterEngine::new(EngineOptions::sequential()).apply_in_place(kind, &mut raster);

    Ok(raster.into_raw_vec())
}

/// Names of all available filters, in display order.
#[wasm_bindgen]
pub fn filter_names_wasm() -> Vec<String> {
    FilterKind::ALL.iter().map(|k| k.name().to_string()).collect()
}
