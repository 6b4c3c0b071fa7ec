//! Geometric primitives and their effective geometry.
//!
//! A primitive stores raw coordinates exactly as the host supplied them.
//! [`GeometricPrimitive::effective`] and [`GeometricPrimitive::effective_in`]
//! produce the post-modifier world-space points that every solver consumes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::mat4::{transform_point, Mat4};
use crate::core::vec3::Vec3;
use crate::error::{GeomError, GeomResult};
use crate::modifiers::{apply_line_modifiers, apply_point_modifiers, Modifiers};

/// Discriminant of a [`GeometricPrimitive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    /// Single coordinate.
    Point,
    /// Two coordinates, `start → end`.
    Line,
    /// Three coordinates `a`, `b`, `c`.
    Plane,
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PrimitiveKind::Point => "point",
            PrimitiveKind::Line => "line",
            PrimitiveKind::Plane => "plane",
        };
        f.write_str(name)
    }
}

/// Point, line or plane with raw coordinates and modifiers.
///
/// Planes carry no modifiers.
///
/// # Examples
/// ```
/// use align_geom::{GeometricPrimitive, PrimitiveKind, Vec3};
/// let plane = GeometricPrimitive::plane(Vec3::X, Vec3::ZERO, Vec3::Y);
/// assert_eq!(plane.kind(), PrimitiveKind::Plane);
/// assert_eq!(plane.effective().points().len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GeometricPrimitive {
    /// A single coordinate.
    Point {
        /// Raw coordinate.
        coord: Vec3,
        /// Point modifiers, applied to `coord` as a vector from the origin.
        #[serde(default)]
        modifiers: Modifiers,
    },
    /// A directed segment.
    Line {
        /// Raw start point.
        start: Vec3,
        /// Raw end point.
        end: Vec3,
        /// Line modifiers, applied to `end - start`.
        #[serde(default)]
        modifiers: Modifiers,
    },
    /// A plane through three points.
    Plane {
        /// First point.
        a: Vec3,
        /// Second point (default pivot).
        b: Vec3,
        /// Third point.
        c: Vec3,
    },
}

impl GeometricPrimitive {
    /// Point with default modifiers.
    pub fn point(coord: Vec3) -> Self {
        Self::Point {
            coord,
            modifiers: Modifiers::default(),
        }
    }

    /// Line with default modifiers.
    pub fn line(start: Vec3, end: Vec3) -> Self {
        Self::Line {
            start,
            end,
            modifiers: Modifiers::default(),
        }
    }

    /// Plane through `a`, `b`, `c`.
    pub fn plane(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self::Plane { a, b, c }
    }

    /// Replaces the modifiers of a point or line. Planes are returned unchanged.
    pub fn with_modifiers(self, new: Modifiers) -> Self {
        match self {
            Self::Point { coord, .. } => Self::Point {
                coord,
                modifiers: new,
            },
            Self::Line { start, end, .. } => Self::Line {
                start,
                end,
                modifiers: new,
            },
            plane @ Self::Plane { .. } => plane,
        }
    }

    /// Kind of this primitive.
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Point { .. } => PrimitiveKind::Point,
            Self::Line { .. } => PrimitiveKind::Line,
            Self::Plane { .. } => PrimitiveKind::Plane,
        }
    }

    /// Modifiers of a point or line.
    pub fn modifiers(&self) -> Option<&Modifiers> {
        match self {
            Self::Point { modifiers, .. } | Self::Line { modifiers, .. } => Some(modifiers),
            Self::Plane { .. } => None,
        }
    }

    /// Mutable modifiers of a point or line.
    pub fn modifiers_mut(&mut self) -> Option<&mut Modifiers> {
        match self {
            Self::Point { modifiers, .. } | Self::Line { modifiers, .. } => Some(modifiers),
            Self::Plane { .. } => None,
        }
    }

    /// Effective geometry for coordinates already in world space.
    pub fn effective(&self) -> EffectiveGeometry {
        self.effective_in(&Mat4::IDENTITY)
    }

    /// Effective geometry for coordinates expressed in the frame `local_to_world`.
    ///
    /// Raw points are mapped to world space first; modifiers then run on the
    /// world-space vectors.
    ///
    /// # Examples
    /// ```
    /// use align_geom::{GeometricPrimitive, Mat4, Modifiers, Vec3};
    /// let world = Mat4::from_translation(Vec3::new(0.0, 0.0, 10.0));
    /// let p = GeometricPrimitive::point(Vec3::ZERO).with_modifiers(Modifiers::new(true, false, 1.0));
    /// // The world-space coordinate (0, 0, 10) is normalized.
    /// assert_eq!(p.effective_in(&world).as_point().unwrap(), Vec3::Z);
    /// ```
    pub fn effective_in(&self, local_to_world: &Mat4) -> EffectiveGeometry {
        let to_world = |p: Vec3| transform_point(local_to_world, p);
        match *self {
            Self::Point { coord, modifiers } => {
                EffectiveGeometry::Point(apply_point_modifiers(to_world(coord), &modifiers))
            }
            Self::Line {
                start,
                end,
                modifiers,
            } => {
                let (start, end) = apply_line_modifiers(to_world(start), to_world(end), &modifiers);
                EffectiveGeometry::Line { start, end }
            }
            Self::Plane { a, b, c } => EffectiveGeometry::Plane {
                a: to_world(a),
                b: to_world(b),
                c: to_world(c),
            },
        }
    }

    /// Returns a primitive whose raw coordinates are its effective geometry
    /// and whose modifiers are reset to default.
    ///
    /// # Examples
    /// ```
    /// use align_geom::{GeometricPrimitive, Modifiers, Vec3};
    /// let line = GeometricPrimitive::line(Vec3::ZERO, Vec3::X)
    ///     .with_modifiers(Modifiers::new(false, false, 4.0));
    /// let baked = line.bake_modifiers();
    /// assert_eq!(baked, GeometricPrimitive::line(Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0)));
    /// ```
    pub fn bake_modifiers(&self) -> Self {
        self.effective().into_primitive()
    }
}

/// Post-modifier points of a primitive: one, two or three positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EffectiveGeometry {
    /// Effective point.
    Point(Vec3),
    /// Effective line; `end` is recomputed from the modified vector.
    Line {
        /// Unmodified start point.
        start: Vec3,
        /// Modified end point.
        end: Vec3,
    },
    /// Plane points (planes have no modifiers).
    Plane {
        /// First point.
        a: Vec3,
        /// Second point.
        b: Vec3,
        /// Third point.
        c: Vec3,
    },
}

impl EffectiveGeometry {
    /// Kind of the originating primitive.
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Point(_) => PrimitiveKind::Point,
            Self::Line { .. } => PrimitiveKind::Line,
            Self::Plane { .. } => PrimitiveKind::Plane,
        }
    }

    /// The point, or [`GeomError::InvalidOperandKind`].
    pub fn as_point(&self) -> GeomResult<Vec3> {
        match *self {
            Self::Point(p) => Ok(p),
            _ => Err(GeomError::wrong_kind(PrimitiveKind::Point, self.kind())),
        }
    }

    /// `(start, end)`, or [`GeomError::InvalidOperandKind`].
    pub fn as_line(&self) -> GeomResult<(Vec3, Vec3)> {
        match *self {
            Self::Line { start, end } => Ok((start, end)),
            _ => Err(GeomError::wrong_kind(PrimitiveKind::Line, self.kind())),
        }
    }

    /// `(a, b, c)`, or [`GeomError::InvalidOperandKind`].
    pub fn as_plane(&self) -> GeomResult<(Vec3, Vec3, Vec3)> {
        match *self {
            Self::Plane { a, b, c } => Ok((a, b, c)),
            _ => Err(GeomError::wrong_kind(PrimitiveKind::Plane, self.kind())),
        }
    }

    /// All points in storage order.
    pub fn points(&self) -> Vec<Vec3> {
        match *self {
            Self::Point(p) => vec![p],
            Self::Line { start, end } => vec![start, end],
            Self::Plane { a, b, c } => vec![a, b, c],
        }
    }

    /// Primitive with these points as raw coordinates and default modifiers.
    pub fn into_primitive(self) -> GeometricPrimitive {
        match self {
            Self::Point(p) => GeometricPrimitive::point(p),
            Self::Line { start, end } => GeometricPrimitive::line(start, end),
            Self::Plane { a, b, c } => GeometricPrimitive::plane(a, b, c),
        }
    }
}
