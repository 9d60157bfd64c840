//! WebAssembly bindings for asciigraph
//!
//! Browser-friendly wrappers around the rendering and path finding entry
//! points. Errors surface as JavaScript exceptions.

use wasm_bindgen::prelude::*;

use crate::core::{CharacterSet, PathOutcome};

/// Initialize WASM module
///
/// Sets up panic hooks and logging for better error messages in the browser.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    use crate::core::logging::init_logging;
    let _ = init_logging(Some("info"), None);
}

fn to_js(error: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{}", error))
}

/// Render a DOT graph as a lane diagram
///
/// # Arguments
/// * `input` - DOT source, e.g. `graph { a -- b; }` split over lines
/// * `style` - `"ascii"` or `"unicode"`
#[wasm_bindgen]
pub fn render_ascii(input: &str, style: &str) -> Result<String, JsValue> {
    let style: CharacterSet = style.parse().map_err(|e: String| JsValue::from_str(&e))?;
    crate::render_with_style(input, style).map_err(to_js)
}

/// Render a DOT graph as an adjacency matrix
#[wasm_bindgen]
pub fn render_matrix(input: &str) -> Result<String, JsValue> {
    crate::render_matrix(input).map_err(to_js)
}

/// Find the shortest path between two vertex values
///
/// Returns JSON: `{"from": "A", "to": "C", "path": ["A", "B", "C"]}`, or an
/// `"error"` field in place of `"path"` when no path exists.
#[wasm_bindgen]
pub fn shortest_path(input: &str, from: char, to: char) -> Result<String, JsValue> {
    let outcome = crate::shortest_path(input, from, to).map_err(to_js)?;

    let result = match &outcome {
        PathOutcome::Found(path) => serde_json::json!({
            "from": from.to_string(),
            "to": to.to_string(),
            "path": path.iter().map(char::to_string).collect::<Vec<_>>(),
        }),
        _ => serde_json::json!({
            "from": from.to_string(),
            "to": to.to_string(),
            "error": outcome.to_string(),
        }),
    };

    serde_json::to_string(&result).map_err(|e| JsValue::from_str(&e.to_string()))
}
