//! Tests for rotation helpers and line/plane intersection.

use super::*;
use approx::assert_relative_eq;
use std::f64::consts::FRAC_PI_2;

#[test]
fn rotation_between_maps_direction() {
    let u = Vec3::new(1.0, 2.0, 3.0);
    let v = Vec3::new(-4.0, 0.5, 2.0);
    let rotated = rotation_between(u, v) * u;
    assert!(rotated.normalize().abs_diff_eq(v.normalize(), 1e-12));
    assert_relative_eq!(rotated.length(), u.length(), epsilon = 1e-12);
}

#[test]
fn rotation_between_parallel_is_identity() {
    let q = rotation_between(Vec3::Y, Vec3::new(0.0, 9.0, 0.0));
    assert_relative_eq!(rotation_angle(q), 0.0, epsilon = 1e-12);
}

#[test]
fn rotation_between_antiparallel_is_half_turn() {
    let u = Vec3::new(1.0, 1.0, 0.0);
    let q = rotation_between(u, -u);
    assert_relative_eq!(rotation_angle(q), PI, epsilon = 1e-9);
    assert!((q * u).abs_diff_eq(-u, 1e-9));
    // Axis is perpendicular to the input.
    let (axis, _) = q.to_axis_angle();
    assert_relative_eq!(axis.dot(u), 0.0, epsilon = 1e-9);
}

#[test]
fn rotation_between_zero_operand_is_identity() {
    assert_eq!(rotation_between(Vec3::ZERO, Vec3::X), Quat::IDENTITY);
    assert_eq!(rotation_between(Vec3::X, Vec3::ZERO), Quat::IDENTITY);
}

#[test]
fn rotation_angle_uses_shortest_representation() {
    // q and -q describe the same rotation.
    let q = Quat::from_rotation_z(FRAC_PI_2);
    assert_relative_eq!(rotation_angle(q), FRAC_PI_2, epsilon = 1e-12);
    assert_relative_eq!(rotation_angle(-q), FRAC_PI_2, epsilon = 1e-12);
}

#[test]
fn axis_angle_rotates_about_axis() {
    let q = axis_angle(Vec3::new(0.0, 0.0, 3.0), FRAC_PI_2);
    assert!((q * Vec3::X).abs_diff_eq(Vec3::Y, 1e-12));
    assert_eq!(axis_angle(Vec3::ZERO, 1.0), Quat::IDENTITY);
}

#[test]
fn intersection_with_z_plane() {
    let hit = line_plane_intersection(
        Vec3::new(1.0, 1.0, 2.0),
        Vec3::new(1.0, 1.0, 3.0),
        Vec3::ZERO,
        Vec3::Z,
        1e-6,
    )
    .unwrap();
    // Infinite line, so the hit lies outside the segment.
    assert!(hit.abs_diff_eq(Vec3::new(1.0, 1.0, 0.0), 1e-12));
}

#[test]
fn parallel_line_has_no_intersection() {
    let hit = line_plane_intersection(
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(1.0, 0.0, 1.0),
        Vec3::ZERO,
        Vec3::Z,
        1e-6,
    );
    assert_eq!(hit, None);
}

#[test]
fn degenerate_line_has_no_intersection() {
    let p = Vec3::new(0.0, 0.0, 1.0);
    assert_eq!(line_plane_intersection(p, p, Vec3::ZERO, Vec3::Z, 1e-6), None);
    assert_eq!(
        line_plane_intersection(p, Vec3::ZERO, Vec3::ZERO, Vec3::ZERO, 1e-6),
        None
    );
}
