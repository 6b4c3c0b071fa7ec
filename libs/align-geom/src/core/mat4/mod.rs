//! Affine matrix helpers built on `glam::DMat4`.
//!
//! Every transform the engine emits is assembled from three atomic kinds
//! (translation, rotation, scale) joined with [`compose`]. Nothing here
//! writes matrix entries by hand.

use glam::DQuat;

use crate::core::vec3::Vec3;
use crate::error::{GeomError, GeomResult};

pub use glam::{DMat3 as Mat3, DMat4 as Mat4};

/// Translation by `v`.
///
/// # Examples
/// ```
/// use align_geom::core::mat4::translation_matrix;
/// use align_geom::Vec3;
/// let m = translation_matrix(Vec3::new(1.0, 2.0, 3.0));
/// assert_eq!(m.transform_point3(Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0));
/// ```
pub fn translation_matrix(v: Vec3) -> Mat4 {
    Mat4::from_translation(v)
}

/// Scale by `factor` along the axes enabled in `axis_mask`; disabled axes keep scale 1.
///
/// # Examples
/// ```
/// use align_geom::core::mat4::scale_matrix;
/// use align_geom::Vec3;
/// let m = scale_matrix(2.0, [true, false, true]);
/// assert_eq!(m.transform_point3(Vec3::ONE), Vec3::new(2.0, 1.0, 2.0));
/// ```
pub fn scale_matrix(factor: f64, axis_mask: [bool; 3]) -> Mat4 {
    let pick = |enabled: bool| if enabled { factor } else { 1.0 };
    scale_from_vec(Vec3::new(
        pick(axis_mask[0]),
        pick(axis_mask[1]),
        pick(axis_mask[2]),
    ))
}

/// Uniform scale on all three axes.
pub fn uniform_scale(factor: f64) -> Mat4 {
    scale_matrix(factor, [true; 3])
}

/// Per-axis scale.
pub fn scale_from_vec(scale: Vec3) -> Mat4 {
    Mat4::from_scale(scale)
}

/// Rotation matrix for a unit quaternion.
pub fn rotation_matrix(rotation: DQuat) -> Mat4 {
    Mat4::from_quat(rotation)
}

/// `a * b`: the result applies `b` first, then `a`.
///
/// # Examples
/// ```
/// use align_geom::core::mat4::{compose, translation_matrix, uniform_scale};
/// use align_geom::Vec3;
/// let m = compose(translation_matrix(Vec3::X), uniform_scale(2.0));
/// assert_eq!(m.transform_point3(Vec3::X), Vec3::new(3.0, 0.0, 0.0));
/// ```
pub fn compose(a: Mat4, b: Mat4) -> Mat4 {
    a * b
}

/// Conjugates `m` so it acts about `pivot` instead of the origin.
///
/// Equivalent to `T(pivot) * m * T(-pivot)`.
pub fn about_pivot(pivot: Vec3, m: Mat4) -> Mat4 {
    pivot_to_pivot(pivot, m, pivot)
}

/// `T(dest) * m * T(-src)`: applies `m` about `src`, then carries `src` onto `dest`.
///
/// # Examples
/// ```
/// use align_geom::core::mat4::{pivot_to_pivot, uniform_scale};
/// use align_geom::Vec3;
/// let m = pivot_to_pivot(Vec3::X, uniform_scale(2.0), Vec3::Y);
/// assert_eq!(m.transform_point3(Vec3::X), Vec3::Y);
/// assert_eq!(m.transform_point3(Vec3::new(2.0, 0.0, 0.0)), Vec3::new(2.0, 1.0, 0.0));
/// ```
pub fn pivot_to_pivot(src: Vec3, m: Mat4, dest: Vec3) -> Mat4 {
    compose(
        compose(translation_matrix(dest), m),
        translation_matrix(-src),
    )
}

/// Inverts `m`, failing when the determinant is within `tolerance` of zero.
///
/// # Errors
///
/// Returns [`GeomError::SingularMatrix`] for non-invertible or non-finite matrices.
///
/// # Examples
/// ```
/// use align_geom::core::mat4::{invert, uniform_scale, Mat4};
/// let inv = invert(&uniform_scale(4.0), 1e-9).unwrap();
/// assert!(inv.abs_diff_eq(uniform_scale(0.25), 1e-12));
/// assert!(invert(&Mat4::ZERO, 1e-9).is_err());
/// ```
pub fn invert(m: &Mat4, tolerance: f64) -> GeomResult<Mat4> {
    let determinant = m.determinant();
    if !determinant.is_finite() || determinant.abs() <= tolerance {
        return Err(GeomError::SingularMatrix { determinant });
    }
    Ok(m.inverse())
}

/// Applies `m` to a point (translation included).
pub fn transform_point(m: &Mat4, p: Vec3) -> Vec3 {
    m.transform_point3(p)
}

/// Splits an affine matrix into `(scale, rotation, translation)`.
pub fn decompose(m: &Mat4) -> (Vec3, DQuat, Vec3) {
    m.to_scale_rotation_translation()
}

/// Returns `true` when all three scale components agree within `tolerance`.
pub fn has_uniform_scale(m: &Mat4, tolerance: f64) -> bool {
    let (scale, _, _) = decompose(m);
    let abs = scale.abs();
    (abs.x - abs.y).abs() <= tolerance && (abs.x - abs.z).abs() <= tolerance
}
