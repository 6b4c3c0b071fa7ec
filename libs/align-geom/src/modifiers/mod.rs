//! Per-primitive modifiers.
//!
//! Points and lines carry three adjustments that run, in this fixed order,
//! before any alignment math:
//!
//! 1. normalize to unit length (skipped for zero-length vectors)
//! 2. flip the direction
//! 3. multiply by a scalar

use config::constants::DEFAULT_MULTIPLIER;
use serde::{Deserialize, Serialize};

use crate::core::vec3::{normalize_or_keep, Vec3};

/// Modifier set stored on point and line primitives.
///
/// # Examples
/// ```
/// use align_geom::{Modifiers, Vec3};
/// let m = Modifiers::new(false, true, 2.0);
/// assert_eq!(m.apply(Vec3::new(1.0, 0.0, 0.0)), Vec3::new(-2.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Modifiers {
    /// Normalize the vector before flipping and scaling.
    pub make_unit_vector: bool,
    /// Negate the vector.
    pub flip_direction: bool,
    /// Scalar applied last.
    pub multiplier: f64,
}

impl Default for Modifiers {
    fn default() -> Self {
        Self {
            make_unit_vector: false,
            flip_direction: false,
            multiplier: DEFAULT_MULTIPLIER,
        }
    }
}

impl Modifiers {
    /// Creates a modifier set.
    pub fn new(make_unit_vector: bool, flip_direction: bool, multiplier: f64) -> Self {
        Self {
            make_unit_vector,
            flip_direction,
            multiplier,
        }
    }

    /// Runs the normalize → flip → multiply pipeline on `v`.
    pub fn apply(&self, v: Vec3) -> Vec3 {
        let mut out = v;
        if self.make_unit_vector {
            out = normalize_or_keep(out);
        }
        if self.flip_direction {
            out = -out;
        }
        out * self.multiplier
    }
}

/// Applies point modifiers to a coordinate treated as a vector from the origin.
pub fn apply_point_modifiers(coord: Vec3, modifiers: &Modifiers) -> Vec3 {
    modifiers.apply(coord)
}

/// Applies line modifiers to the `start → end` vector. `start` never moves.
///
/// # Examples
/// ```
/// use align_geom::modifiers::apply_line_modifiers;
/// use align_geom::{Modifiers, Vec3};
/// let (start, end) = apply_line_modifiers(
///     Vec3::new(1.0, 1.0, 1.0),
///     Vec3::new(1.0, 1.0, 5.0),
///     &Modifiers::new(true, true, 3.0),
/// );
/// assert_eq!(start, Vec3::new(1.0, 1.0, 1.0));
/// assert_eq!(end, Vec3::new(1.0, 1.0, -2.0));
/// ```
pub fn apply_line_modifiers(start: Vec3, end: Vec3, modifiers: &Modifiers) -> (Vec3, Vec3) {
    (start, start + modifiers.apply(end - start))
}

#[cfg(test)]
mod tests;
