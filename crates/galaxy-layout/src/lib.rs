//! Geometry engine for the galaxy visualization.
//!
//! Converts the abstract orbital records fetched from the world store into
//! a collision-free, camera-presentable 3D layout: barycentric multi-star
//! placement, planetary orbit geometry, outward orbit scaling around the
//! stellar exclusion zone, and camera framing. Everything here is pure and
//! deterministic over immutable snapshots: the same inputs always yield
//! the same layout. Rendering and camera animation belong to the host UI,
//! which only consumes the positions, radii, paths and poses produced here.

pub mod camera;
pub mod coords;
pub mod orbit;
pub mod orbit_scale;
pub mod scene;
pub mod spectral;
pub mod star_layout;
pub mod view_state;

#[cfg(test)]
mod camera_test;
#[cfg(test)]
mod orbit_test;

// Re-export the layout surface consumed by the rendering collaborator
pub use camera::{frame, framing_distance, CameraPose};
pub use scene::{
    galaxy_scene, system_scene, GalaxyScene, PlanetNode, StarNode, SystemMarker, SystemScene,
};
pub use spectral::{DisplayColor, SpectralClass};
pub use star_layout::{StarLayout, StarPlacement};
pub use view_state::{ViewController, ViewState};
