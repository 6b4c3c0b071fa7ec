//! Thin wrapper around `glam::DVec3` shared across the alignment crates.
//!
//! Higher layers import `Vec3` from here instead of naming glam directly.

use config::constants::EPSILON;
use tracing::debug;

pub use glam::DVec3 as Vec3;

/// Normalizes `v`, leaving zero-length vectors untouched.
///
/// Modifiers ask for unit vectors on arbitrary user data, so a zero vector
/// here is a no-op rather than an error.
///
/// # Examples
/// ```
/// use align_geom::core::vec3::{normalize_or_keep, Vec3};
/// assert_eq!(normalize_or_keep(Vec3::new(0.0, 4.0, 0.0)), Vec3::Y);
/// assert_eq!(normalize_or_keep(Vec3::ZERO), Vec3::ZERO);
/// ```
pub fn normalize_or_keep(v: Vec3) -> Vec3 {
    let length = v.length();
    if length <= EPSILON || !length.is_finite() {
        debug!(?v, "skipping normalization of zero-length vector");
        return v;
    }
    v / length
}

/// Signed distance of `p` along the unit direction `start → end`, measured from `start`.
///
/// Returns `0.0` for every point when the direction is degenerate.
///
/// # Examples
/// ```
/// use align_geom::core::vec3::{distance_in_direction, Vec3};
/// let d = distance_in_direction(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), Vec3::new(5.0, 1.0, 0.0));
/// assert_eq!(d, 5.0);
/// ```
pub fn distance_in_direction(start: Vec3, end: Vec3, p: Vec3) -> f64 {
    let direction = normalize_or_keep(end - start);
    if direction.length_squared() <= EPSILON * EPSILON {
        return 0.0;
    }
    (p - start).dot(direction)
}
