//! Camera framing for galaxy and system views.
//!
//! A framing heuristic, not a physical camera: given the visual extent of
//! whatever is on screen, pick a distance that keeps it inside a fixed
//! horizontal field of view with some breathing room, from a fixed
//! above-and-behind direction. The animated interpolation toward the pose
//! is the renderer's concern; only the target pose is computed here.

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Horizontal field of view, degrees
pub const FOV_DEG: f64 = 60.0;

/// Breathing room multiplier around the framed extent
pub const FRAME_PADDING: f64 = 1.35;

/// Framing distance clamp, display units
pub const MIN_DISTANCE: f64 = 10.0;
pub const MAX_DISTANCE: f64 = 200.0;

/// Elevation-to-forward ratio of the fixed camera offset direction
pub const CAMERA_LIFT: f64 = 0.45;

/// Extent substituted by scene assembly when a scene is degenerate
pub const DEFAULT_EXTENT: f64 = 5.0;

/// A deterministic camera target: where the camera sits and what it looks at
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct CameraPose {
    pub position: Point3<f64>,
    pub target: Point3<f64>,
}

/// Distance that keeps `extent` on screen within the fixed field of view
pub fn framing_distance(extent: f64) -> f64 {
    let half_fov = (FOV_DEG / 2.0).to_radians();
    (extent * FRAME_PADDING / half_fov.tan()).clamp(MIN_DISTANCE, MAX_DISTANCE)
}

/// Pose looking at `target` from above-and-behind at the framing distance
pub fn frame(target: Point3<f64>, extent: f64) -> CameraPose {
    let offset = Vector3::new(0.0, CAMERA_LIFT, 1.0).normalize() * framing_distance(extent);

    CameraPose {
        position: target + offset,
        target,
    }
}
