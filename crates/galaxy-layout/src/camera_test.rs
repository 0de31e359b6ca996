use approx::assert_relative_eq;
use nalgebra::Point3;

use crate::camera::{
    frame, framing_distance, CAMERA_LIFT, FOV_DEG, FRAME_PADDING, MAX_DISTANCE, MIN_DISTANCE,
};

#[test]
fn distance_follows_the_fov_formula_in_range() {
    let extent = 50.0;
    let expected = extent * FRAME_PADDING / (FOV_DEG / 2.0).to_radians().tan();

    assert!(expected > MIN_DISTANCE && expected < MAX_DISTANCE);
    assert_relative_eq!(framing_distance(extent), expected, epsilon = 1e-9);
}

#[test]
fn distance_is_clamped_at_both_ends() {
    assert_eq!(framing_distance(0.1), MIN_DISTANCE);
    assert_eq!(framing_distance(0.0), MIN_DISTANCE);
    assert_eq!(framing_distance(10_000.0), MAX_DISTANCE);
}

#[test]
fn distance_grows_with_extent() {
    let mut previous = framing_distance(10.0);
    for extent in [20.0, 40.0, 60.0] {
        let distance = framing_distance(extent);
        assert!(distance >= previous);
        previous = distance;
    }
}

#[test]
fn pose_sits_above_and_behind_the_target() {
    let target = Point3::new(30.0, -2.0, 12.0);
    let pose = frame(target, 50.0);

    assert_eq!(pose.target, target);

    let offset = pose.position - target;
    assert_relative_eq!(offset.norm(), framing_distance(50.0), epsilon = 1e-9);

    // Fixed direction: no sideways component, lift ratio preserved
    assert_relative_eq!(offset.x, 0.0, epsilon = 1e-12);
    assert!(offset.y > 0.0 && offset.z > 0.0);
    assert_relative_eq!(offset.y / offset.z, CAMERA_LIFT, epsilon = 1e-9);
}

#[test]
fn framing_is_deterministic() {
    let target = Point3::new(1.0, 2.0, 3.0);
    assert_eq!(frame(target, 25.0), frame(target, 25.0));
}
