use approx::assert_relative_eq;
use uuid::Uuid;
use worldstore::Planet;

use crate::orbit::{
    current_position, orbit_path, planet_display_radius, scaled_semi_major_axis,
    unscaled_perihelion, ORBIT_BASE_UNIT, ORBIT_PATH_SEGMENTS, PLANET_BASE_RADIUS,
};

fn planet(semi_major_axis: f64, eccentricity: f64, inclination_deg: f64, angle_deg: f64) -> Planet {
    Planet {
        id: Uuid::new_v4(),
        system_id: Uuid::new_v4(),
        name: String::new(),
        semi_major_axis,
        eccentricity,
        inclination_deg,
        orbit_angle_deg: angle_deg,
        display_radius: 1.0,
        primary_color: "#FFFFFF".to_string(),
        atmosphere_color: "#FFFFFF".to_string(),
        atmosphere_intensity: 0.0,
    }
}

#[test]
fn semi_major_axis_is_sqrt_compressed() {
    let p = planet(4.0, 0.0, 0.0, 0.0);
    assert_relative_eq!(scaled_semi_major_axis(&p, 1.0), 2.0 * ORBIT_BASE_UNIT);

    // Scaling is linear on top of the compression
    assert_relative_eq!(scaled_semi_major_axis(&p, 3.0), 6.0 * ORBIT_BASE_UNIT);

    // 100× the distance only renders 10× farther out
    let far = planet(400.0, 0.0, 0.0, 0.0);
    assert_relative_eq!(
        scaled_semi_major_axis(&far, 1.0),
        10.0 * scaled_semi_major_axis(&p, 1.0),
        epsilon = 1e-9
    );
}

#[test]
fn angle_zero_lies_on_the_positive_x_axis() {
    let p = planet(4.0, 0.2, 0.0, 0.0);
    let position = current_position(&p, 1.0);

    assert_relative_eq!(position.x, scaled_semi_major_axis(&p, 1.0));
    assert_relative_eq!(position.y, 0.0, epsilon = 1e-12);
    assert_relative_eq!(position.z, 0.0, epsilon = 1e-12);
}

#[test]
fn eccentricity_shortens_the_minor_axis() {
    let p = planet(4.0, 0.6, 0.0, 90.0);
    let a = scaled_semi_major_axis(&p, 1.0);
    let b = a * (1.0f64 - 0.6 * 0.6).sqrt();

    let position = current_position(&p, 1.0);
    assert_relative_eq!(position.x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(position.z, b, epsilon = 1e-9);
}

#[test]
fn inclination_rotates_into_the_vertical_plane() {
    let flat = planet(1.0, 0.0, 0.0, 90.0);
    assert_relative_eq!(current_position(&flat, 1.0).y, 0.0, epsilon = 1e-12);

    let edge_on = planet(1.0, 0.0, 90.0, 90.0);
    let position = current_position(&edge_on, 1.0);
    assert_relative_eq!(position.y, ORBIT_BASE_UNIT, epsilon = 1e-9);
    assert_relative_eq!(position.z, 0.0, epsilon = 1e-9);
}

#[test]
fn path_is_a_closed_polyline() {
    let p = planet(4.0, 0.3, 25.0, 0.0);
    let path = orbit_path(&p, 1.5);

    assert_eq!(path.len(), ORBIT_PATH_SEGMENTS + 1);
    assert_eq!(path.first(), path.last());
}

#[test]
fn path_points_recover_the_ellipse() {
    let p = planet(9.0, 0.4, 30.0, 0.0);
    let a = scaled_semi_major_axis(&p, 1.0);
    let b = a * (1.0f64 - 0.4 * 0.4).sqrt();

    for point in orbit_path(&p, 1.0) {
        // Undo the inclination tilt: both y and z come from the same
        // planar component, so its magnitude is their hypotenuse.
        let planar_z = (point.y * point.y + point.z * point.z).sqrt();
        let on_ellipse = (point.x / a).powi(2) + (planar_z / b).powi(2);

        assert_relative_eq!(on_ellipse, 1.0, epsilon = 1e-9);
    }
}

#[test]
fn perihelion_follows_the_unscaled_axis() {
    let p = planet(4.0, 0.2, 0.0, 0.0);
    assert_relative_eq!(unscaled_perihelion(&p), 2.0 * ORBIT_BASE_UNIT * 0.8);

    let circular = planet(4.0, 0.0, 0.0, 0.0);
    assert_relative_eq!(
        unscaled_perihelion(&circular),
        scaled_semi_major_axis(&circular, 1.0)
    );
}

#[test]
fn planet_size_is_sqrt_compressed() {
    let mut p = planet(1.0, 0.0, 0.0, 0.0);
    p.display_radius = 4.0;
    assert_relative_eq!(planet_display_radius(&p), 2.0 * PLANET_BASE_RADIUS);

    p.display_radius = 1.0;
    assert_relative_eq!(planet_display_radius(&p), PLANET_BASE_RADIUS);
}
