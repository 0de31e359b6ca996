//! Cylindrical-to-Cartesian conversion for galaxy-scale placement.

use nalgebra::Point3;
use worldstore::GalacticPosition;

/// Converts a store position (azimuth/distance/elevation) into a scene
/// position.
///
/// The galactic plane maps onto x/z, with elevation carried straight
/// through as y. Defined for all finite inputs.
pub fn galactic_to_cartesian(position: &GalacticPosition) -> Point3<f64> {
    let azimuth = position.azimuth_deg.to_radians();

    Point3::new(
        position.distance * azimuth.cos(),
        position.elevation,
        position.distance * azimuth.sin(),
    )
}

/// Recovers the azimuth of a scene position, in degrees within [0, 360)
pub fn azimuth_of(point: &Point3<f64>) -> f64 {
    point.z.atan2(point.x).to_degrees().rem_euclid(360.0)
}
