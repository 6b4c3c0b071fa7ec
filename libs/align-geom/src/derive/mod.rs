//! Derived quantities: line vectors and plane bases.

use serde::{Deserialize, Serialize};

use crate::core::mat4::Mat3;
use crate::core::vec3::{normalize_or_keep, Vec3};

/// Vector from `start` to `end`.
pub fn line_vector(start: Vec3, end: Vec3) -> Vec3 {
    end - start
}

/// Pivot, leading edge and normal of a plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneBasis {
    /// Point held fixed by plane solvers.
    pub pivot: Vec3,
    /// `other - pivot`; resolves the in-plane rotation.
    pub leading_edge: Vec3,
    /// `leading_edge × (c - pivot)`, negated when flipped. Not normalized.
    pub normal: Vec3,
}

/// Derives the [`PlaneBasis`] of the plane through `a`, `b`, `c`.
///
/// B is the pivot and A the other point unless `pivot_is_a` swaps them.
/// C is always the third point.
///
/// # Examples
/// ```
/// use align_geom::{plane_basis, Vec3};
/// let basis = plane_basis(Vec3::X, Vec3::ZERO, Vec3::Y, false, false);
/// assert_eq!(basis.pivot, Vec3::ZERO);
/// assert_eq!(basis.leading_edge, Vec3::X);
/// assert_eq!(basis.normal, Vec3::Z);
///
/// let flipped = plane_basis(Vec3::X, Vec3::ZERO, Vec3::Y, false, true);
/// assert_eq!(flipped.normal, -Vec3::Z);
/// ```
pub fn plane_basis(a: Vec3, b: Vec3, c: Vec3, pivot_is_a: bool, flip_normal: bool) -> PlaneBasis {
    let (pivot, other) = if pivot_is_a { (a, b) } else { (b, a) };
    let leading_edge = other - pivot;
    let normal = leading_edge.cross(c - pivot);
    PlaneBasis {
        pivot,
        leading_edge,
        normal: if flip_normal { -normal } else { normal },
    }
}

/// Unit normal of the plane through `a`, `b`, `c` with B as pivot.
///
/// Degenerate planes return the zero vector.
pub fn plane_unit_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    normalize_or_keep(plane_basis(a, b, c, false, false).normal)
}

/// Orthonormal frame for sliding along an aligned face.
///
/// Columns are `(-(edge × normal)ˆ, normalˆ, edgeˆ)`, so local Y is the face
/// normal and local Z runs along the leading edge.
///
/// # Examples
/// ```
/// use align_geom::derive::{plane_basis, plane_orientation};
/// use align_geom::Vec3;
/// let frame = plane_orientation(&plane_basis(Vec3::X, Vec3::ZERO, Vec3::Y, false, false));
/// assert_eq!(frame.y_axis, Vec3::Z);
/// assert_eq!(frame.z_axis, Vec3::X);
/// assert_eq!(frame.x_axis, Vec3::Y);
/// ```
pub fn plane_orientation(basis: &PlaneBasis) -> Mat3 {
    let edge = normalize_or_keep(basis.leading_edge);
    let normal = normalize_or_keep(basis.normal);
    let side = -normalize_or_keep(edge.cross(normal));
    Mat3::from_cols(side, normal, edge)
}
