//! Planetary orbit geometry.
//!
//! Orbits are drawn as inclined ellipses parametrized about their center,
//! with the semi-major axis square-root compressed so distant orbits stay
//! on screen. Eccentricity is assumed valid input (0 ≤ e < 1); open
//! orbits are out of contract.

use std::f64::consts::PI;

use nalgebra::Point3;
use worldstore::Planet;

/// Display units per square root of a natural semi-major-axis unit
pub const ORBIT_BASE_UNIT: f64 = 5.0;

/// Segment count of a rendered orbit polyline
pub const ORBIT_PATH_SEGMENTS: usize = 128;

/// Display units per square root of an authored planet radius unit
pub const PLANET_BASE_RADIUS: f64 = 0.4;

/// On-screen semi-major axis after compression and outward scaling
pub fn scaled_semi_major_axis(planet: &Planet, orbit_scale: f64) -> f64 {
    planet.semi_major_axis.sqrt() * ORBIT_BASE_UNIT * orbit_scale
}

/// Closest-approach distance of the orbit before any outward scaling
pub fn unscaled_perihelion(planet: &Planet) -> f64 {
    scaled_semi_major_axis(planet, 1.0) * (1.0 - planet.eccentricity)
}

/// On-screen planet radius: square-root compression of the authored size
pub fn planet_display_radius(planet: &Planet) -> f64 {
    planet.display_radius.sqrt() * PLANET_BASE_RADIUS
}

/// Position on the orbit at a parametric angle (radians)
///
/// The planar ellipse is tilted by the record's inclination: the planar
/// z-component rotates into the y/z plane, leaving x untouched.
pub fn position_at(planet: &Planet, orbit_scale: f64, angle_rad: f64) -> Point3<f64> {
    let a = scaled_semi_major_axis(planet, orbit_scale);
    let b = a * (1.0 - planet.eccentricity * planet.eccentricity).sqrt();
    let inclination = planet.inclination_deg.to_radians();

    let x = a * angle_rad.cos();
    let planar_z = b * angle_rad.sin();

    Point3::new(x, planar_z * inclination.sin(), planar_z * inclination.cos())
}

/// Current position from the record's orbital angle
pub fn current_position(planet: &Planet, orbit_scale: f64) -> Point3<f64> {
    position_at(planet, orbit_scale, planet.orbit_angle_deg.to_radians())
}

/// Closed polyline of one full revolution, for rendering only
///
/// The first point is repeated at the end so the curve closes exactly.
pub fn orbit_path(planet: &Planet, orbit_scale: f64) -> Vec<Point3<f64>> {
    let mut path: Vec<Point3<f64>> = (0..ORBIT_PATH_SEGMENTS)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / ORBIT_PATH_SEGMENTS as f64;
            position_at(planet, orbit_scale, angle)
        })
        .collect();

    path.push(path[0]);
    path
}
