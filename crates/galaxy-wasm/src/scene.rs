//! Scene computation exposed to the rendering UI.
//!
//! Each function takes the plain records the data-access layer fetched
//! (deserialized straight from the store's JSON) and returns a fully
//! laid-out scene. All computation is deterministic; the UI may call
//! these as often as its snapshot changes.

use wasm_bindgen::prelude::*;

use galaxy_layout::{camera, galaxy_scene, spectral, system_scene};
use worldstore::{Planet, StarSystem};

use crate::{from_js, to_js};

/// Lay out the galaxy view over every system of a world.
///
/// # Arguments
/// * `systems` - Array of StarSystem records
///
/// # Returns
/// A GalaxyScene: one marker per system plus the framing camera pose.
#[wasm_bindgen]
pub fn compute_galaxy_scene(systems: JsValue) -> Result<JsValue, JsError> {
    let systems: Vec<StarSystem> = from_js(systems)?;
    to_js(&galaxy_scene(&systems))
}

/// Lay out one selected system in detail.
///
/// `planets` may be the world's entire planet list; records belonging to
/// other systems are ignored.
///
/// # Arguments
/// * `system` - The selected StarSystem record
/// * `planets` - Array of Planet records
///
/// # Returns
/// A SystemScene: star placements, scaled planet orbits, combined extent
/// and the framing camera pose.
#[wasm_bindgen]
pub fn compute_system_scene(system: JsValue, planets: JsValue) -> Result<JsValue, JsError> {
    let system: StarSystem = from_js(system)?;
    let planets: Vec<Planet> = from_js(planets)?;
    to_js(&system_scene(&system, &planets))
}

/// Display color for a spectral code, as a "#RRGGBB" string.
///
/// Unrecognized codes return the neutral fallback color.
#[wasm_bindgen]
pub fn star_color(spectral_class: &str) -> String {
    spectral::color_for(spectral_class).to_hex()
}

/// Camera distance that frames the given visual extent
#[wasm_bindgen]
pub fn framing_distance(extent: f64) -> f64 {
    camera::framing_distance(extent)
}
