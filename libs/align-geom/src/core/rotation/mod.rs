//! Rotations and the line/plane intersection used by the compose family.

use std::f64::consts::PI;

use config::constants::EPSILON;
use tracing::debug;

use crate::core::vec3::Vec3;

pub use glam::DQuat as Quat;

/// Shortest-arc rotation taking the direction of `u` onto the direction of `v`.
///
/// Exactly anti-parallel inputs have no unique shortest arc; they rotate by
/// 180° about an axis perpendicular to `u`. A zero-length operand yields the
/// identity rotation.
///
/// # Examples
/// ```
/// use align_geom::core::rotation::rotation_between;
/// use align_geom::Vec3;
/// let q = rotation_between(Vec3::X, Vec3::new(0.0, 5.0, 0.0));
/// assert!((q * Vec3::X).abs_diff_eq(Vec3::Y, 1e-12));
///
/// let flipped = rotation_between(Vec3::Z, -Vec3::Z);
/// assert!((flipped * Vec3::Z).abs_diff_eq(-Vec3::Z, 1e-12));
/// ```
pub fn rotation_between(u: Vec3, v: Vec3) -> Quat {
    let (u_len, v_len) = (u.length(), v.length());
    if u_len <= EPSILON || v_len <= EPSILON || !u_len.is_finite() || !v_len.is_finite() {
        debug!(?u, ?v, "zero-length rotation operand, using identity");
        return Quat::IDENTITY;
    }
    let from = u / u_len;
    let to = v / v_len;
    if from.dot(to) <= -1.0 + EPSILON {
        return Quat::from_axis_angle(from.any_orthonormal_vector(), PI);
    }
    Quat::from_rotation_arc(from, to)
}

/// Rotation angle of `q` in radians, in `[0, π]`.
///
/// Computed as `2·atan2(|xyz|, |w|)`, which stays accurate near 0 and π.
///
/// # Examples
/// ```
/// use align_geom::core::rotation::{rotation_angle, Quat};
/// let q = Quat::from_rotation_x(1.25);
/// assert!((rotation_angle(q) - 1.25).abs() < 1e-12);
/// ```
pub fn rotation_angle(q: Quat) -> f64 {
    2.0 * q.xyz().length().atan2(q.w.abs())
}

/// Rotation of `radians` about `axis`; a zero axis yields identity.
pub fn axis_angle(axis: Vec3, radians: f64) -> Quat {
    let length = axis.length();
    if length <= EPSILON || !length.is_finite() {
        debug!(?axis, "zero-length rotation axis, using identity");
        return Quat::IDENTITY;
    }
    Quat::from_axis_angle(axis / length, radians)
}

/// Intersects the infinite line through `p0` and `p1` with a plane.
///
/// `tolerance` is the relative parallel threshold: the line counts as
/// parallel when `|n·d| <= tolerance·|n|·|d|`. Returns `None` for parallel
/// lines and for degenerate lines or normals.
///
/// # Examples
/// ```
/// use align_geom::core::rotation::line_plane_intersection;
/// use align_geom::Vec3;
/// let hit = line_plane_intersection(
///     Vec3::new(0.0, 0.0, -1.0),
///     Vec3::new(0.0, 0.0, 1.0),
///     Vec3::ZERO,
///     Vec3::Z,
///     1e-6,
/// );
/// assert_eq!(hit, Some(Vec3::ZERO));
/// ```
pub fn line_plane_intersection(
    p0: Vec3,
    p1: Vec3,
    plane_point: Vec3,
    plane_normal: Vec3,
    tolerance: f64,
) -> Option<Vec3> {
    let direction = p1 - p0;
    let (d_len, n_len) = (direction.length(), plane_normal.length());
    if d_len <= EPSILON || n_len <= EPSILON {
        return None;
    }
    let denom = plane_normal.dot(direction);
    if denom.abs() <= tolerance * d_len * n_len {
        return None;
    }
    let t = plane_normal.dot(plane_point - p0) / denom;
    let hit = p0 + direction * t;
    hit.is_finite().then_some(hit)
}

#[cfg(test)]
mod tests;
