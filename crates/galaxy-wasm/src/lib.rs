//! WASM bindings for the galaxy visualization geometry engine.
//!
//! Provides the JavaScript/TypeScript surface the rendering UI consumes:
//! scene computation over fetched world-store records, plus small lookup
//! helpers. Uses `wasm-bindgen` with `serde-wasm-bindgen` for type
//! conversion at the boundary.
//!
//! ## Quick Start (JavaScript)
//!
//! ```javascript
//! import init, {
//!     compute_galaxy_scene,
//!     compute_system_scene,
//! } from 'galaxy-wasm';
//!
//! await init();
//!
//! const galaxy = compute_galaxy_scene(systems);
//! const scene = compute_system_scene(systems[0], planets);
//! camera.flyTo(scene.camera);
//! ```

use wasm_bindgen::prelude::*;

mod scene;

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}

// Type aliases for types serialized as plain JS values
#[wasm_bindgen(typescript_custom_section)]
const TS_SCENE_TYPES: &'static str = r#"
/** Cartesian scene position, [x, y, z] in display units */
export type Point3 = [number, number, number];
/** UUID string */
export type Uuid = string;
"#;
