//! Scene assembly: complete layout results for the rendering collaborator.
//!
//! Two scenes exist, one per view state. The galaxy scene places every
//! system of a world as a single marker; the system scene lays out one
//! selected system in full: star placements, scaled planetary orbits and
//! the camera pose framing it all. Both are recomputed deterministically
//! from the current snapshot and tolerate partial data (a cancelled fetch
//! may leave a system without stars, or planets without their system).

use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;
use worldstore::{Planet, StarSystem};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::camera::{self, CameraPose};
use crate::coords;
use crate::orbit;
use crate::orbit_scale;
use crate::spectral::{self, DisplayColor, SpectralClass};
use crate::star_layout;

/// One system as drawn in the galaxy view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct SystemMarker {
    pub id: Uuid,
    pub name: String,
    pub position: Point3<f64>,
    /// Primary star's color; neutral when the snapshot has no stars
    pub color: DisplayColor,
    pub radius: f64,
}

/// The whole-world view: all systems visible, none selected
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct GalaxyScene {
    pub markers: Vec<SystemMarker>,
    /// Radial reach of the farthest marker
    pub extent: f64,
    pub camera: CameraPose,
}

/// A star ready to draw: position, size, color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct StarNode {
    pub position: Point3<f64>,
    pub display_radius: f64,
    pub color: DisplayColor,
}

/// A planet ready to draw: position, size, orbit path and atmosphere
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct PlanetNode {
    pub id: Uuid,
    pub name: String,
    pub position: Point3<f64>,
    pub display_radius: f64,
    /// Closed orbit polyline, for rendering only
    pub path: Vec<Point3<f64>>,
    pub primary_color: DisplayColor,
    pub atmosphere_color: DisplayColor,
    /// Clamped to [0, 1]
    pub atmosphere_intensity: f64,
}

/// One selected system laid out in detail
///
/// Star and planet positions are local to the system barycenter; `origin`
/// is the system's converted world position, and the camera pose frames
/// the scene about that origin. The renderer translates the local nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct SystemScene {
    pub id: Uuid,
    pub name: String,
    pub origin: Point3<f64>,
    pub stars: Vec<StarNode>,
    /// Shared outward scale applied to every orbit, ≥ 1
    pub orbit_scale: f64,
    pub planets: Vec<PlanetNode>,
    /// Combined visual extent: stars plus scaled orbits
    pub max_extent: f64,
    pub camera: CameraPose,
}

/// Builds the galaxy view over every system of a world
pub fn galaxy_scene(systems: &[StarSystem]) -> GalaxyScene {
    let markers: Vec<SystemMarker> = systems
        .iter()
        .map(|system| {
            let (color, radius) = match system.primary_star() {
                Some(star) => {
                    let class = SpectralClass::from_code(&star.spectral_class);
                    (class.color(), class.display_radius(star.radius))
                }
                None => (DisplayColor::NEUTRAL, spectral::BASE_STAR_RADIUS),
            };

            SystemMarker {
                id: system.id,
                name: system.display_name(),
                position: coords::galactic_to_cartesian(&system.position),
                color,
                radius,
            }
        })
        .collect();

    let extent = markers
        .iter()
        .map(|marker| marker.position.coords.norm())
        .fold(0.0, f64::max);

    let pose = camera::frame(Point3::origin(), framed_extent(extent));

    debug!(systems = markers.len(), extent, "computed galaxy scene");

    GalaxyScene {
        markers,
        extent,
        camera: pose,
    }
}

/// Lays out one selected system in full.
///
/// `planets` may be the world's entire planet list; records belonging to
/// other systems are filtered out here, so a stale or partial snapshot
/// cannot corrupt the scene.
pub fn system_scene(system: &StarSystem, planets: &[Planet]) -> SystemScene {
    let layout = star_layout::solve(&system.stars);

    let own: Vec<&Planet> = planets
        .iter()
        .filter(|planet| planet.belongs_to(system.id))
        .collect();

    let scale = orbit_scale::resolve(layout.max_extent, &own);

    let stars: Vec<StarNode> = layout
        .placements
        .iter()
        .map(|placement| StarNode {
            position: placement.position(),
            display_radius: placement.display_radius,
            color: placement.color,
        })
        .collect();

    let planet_nodes: Vec<PlanetNode> = own
        .iter()
        .map(|planet| PlanetNode {
            id: planet.id,
            name: planet.name.clone(),
            position: orbit::current_position(planet, scale),
            display_radius: orbit::planet_display_radius(planet),
            path: orbit::orbit_path(planet, scale),
            primary_color: DisplayColor::from_hex(&planet.primary_color)
                .unwrap_or(DisplayColor::NEUTRAL),
            atmosphere_color: DisplayColor::from_hex(&planet.atmosphere_color)
                .unwrap_or(DisplayColor::NEUTRAL),
            atmosphere_intensity: planet.atmosphere_intensity.clamp(0.0, 1.0),
        })
        .collect();

    let max_extent = own
        .iter()
        .map(|planet| orbit::scaled_semi_major_axis(planet, scale))
        .fold(layout.max_extent, f64::max);

    let origin = coords::galactic_to_cartesian(&system.position);
    let pose = camera::frame(origin, framed_extent(max_extent));

    debug!(
        system = %system.display_name(),
        stars = stars.len(),
        planets = planet_nodes.len(),
        orbit_scale = scale,
        max_extent,
        "computed system scene"
    );

    SystemScene {
        id: system.id,
        name: system.display_name(),
        origin,
        stars,
        orbit_scale: scale,
        planets: planet_nodes,
        max_extent,
        camera: pose,
    }
}

/// Degenerate extents fall back to a small default before framing
fn framed_extent(extent: f64) -> f64 {
    if extent > 0.0 {
        extent
    } else {
        camera::DEFAULT_EXTENT
    }
}
