//! Outward orbit scaling around the stellar exclusion zone.
//!
//! Every orbit in a system shares one scale factor, chosen so the closest
//! planetary approach stays outside the star layout plus a buffer. Orbits
//! are only ever pushed outward; the factor is never below 1.

use worldstore::Planet;

use crate::orbit;

/// Clearance added beyond the star layout's outer bound, display units
pub const EXCLUSION_BUFFER: f64 = 1.5;

/// Radius no planetary perihelion may fall inside
pub fn exclusion_radius(star_extent: f64) -> f64 {
    star_extent + EXCLUSION_BUFFER
}

/// Resolves the shared orbit scale for a system.
///
/// With no planets, or when every unscaled perihelion already clears the
/// exclusion radius, the scale is exactly 1. Otherwise the factor lands
/// the minimum perihelion exactly on the exclusion boundary.
pub fn resolve(star_extent: f64, planets: &[&Planet]) -> f64 {
    let min_perihelion = planets
        .iter()
        .map(|planet| orbit::unscaled_perihelion(planet))
        .fold(f64::INFINITY, f64::min);

    if !min_perihelion.is_finite() {
        return 1.0;
    }

    let exclusion = exclusion_radius(star_extent);
    if min_perihelion >= exclusion {
        1.0
    } else {
        exclusion / min_perihelion
    }
}
