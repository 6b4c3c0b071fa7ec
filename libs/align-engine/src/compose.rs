//! Calculate and compose: measurements and new primitives derived from
//! existing ones.
//!
//! Every operand goes through its effective geometry first. Composed
//! primitives carry default modifiers.

use align_geom::core::rotation::{line_plane_intersection, rotation_angle, rotation_between};
use align_geom::derive::plane_unit_normal;
use align_geom::{line_vector, plane_basis, GeomError, GeometricPrimitive, PrimitiveKind, Vec3};
use config::constants::{EngineConfig, PARALLEL_TOLERANCE};

use crate::error::{AlignError, AlignResult};

// =============================================================================
// CALCULATIONS
// =============================================================================

/// Length of a line.
///
/// # Examples
/// ```
/// use align_engine::compose::line_length;
/// use align_geom::{GeometricPrimitive, Vec3};
/// let line = GeometricPrimitive::line(Vec3::ZERO, Vec3::new(3.0, 4.0, 0.0));
/// assert_eq!(line_length(&line).unwrap(), 5.0);
/// ```
pub fn line_length(line: &GeometricPrimitive) -> AlignResult<f64> {
    let (start, end) = line.effective().as_line()?;
    Ok(line_vector(start, end).length())
}

/// Angle between two line directions in the configured angle unit.
pub fn angle_between_lines(
    first: &GeometricPrimitive,
    second: &GeometricPrimitive,
    engine: &EngineConfig,
) -> AlignResult<f64> {
    let (a_start, a_end) = first.effective().as_line()?;
    let (b_start, b_end) = second.effective().as_line()?;
    let rotation = rotation_between(line_vector(a_start, a_end), line_vector(b_start, b_end));
    Ok(engine.angle_unit.from_radians(rotation_angle(rotation)))
}

/// Distance between two points.
pub fn distance_between_points(first: &GeometricPrimitive, second: &GeometricPrimitive) -> AlignResult<f64> {
    let a = first.effective().as_point()?;
    let b = second.effective().as_point()?;
    Ok(a.distance(b))
}

// =============================================================================
// COMPOSITION
// =============================================================================

/// The line's vector, re-rooted at the world origin.
pub fn line_from_origin(line: &GeometricPrimitive) -> AlignResult<GeometricPrimitive> {
    let (start, end) = line.effective().as_line()?;
    Ok(GeometricPrimitive::line(Vec3::ZERO, line_vector(start, end)))
}

/// Unit normal of a plane as a line starting at point B.
///
/// # Examples
/// ```
/// use align_engine::compose::normal_from_plane;
/// use align_geom::{GeometricPrimitive, Vec3};
/// let plane = GeometricPrimitive::plane(Vec3::new(3.0, 1.0, 1.0), Vec3::ONE, Vec3::new(1.0, 4.0, 1.0));
/// let normal = normal_from_plane(&plane).unwrap();
/// assert_eq!(normal, GeometricPrimitive::line(Vec3::ONE, Vec3::new(1.0, 1.0, 2.0)));
/// ```
pub fn normal_from_plane(plane: &GeometricPrimitive) -> AlignResult<GeometricPrimitive> {
    let (a, b, c) = plane.effective().as_plane()?;
    Ok(GeometricPrimitive::line(b, b + plane_unit_normal(a, b, c)))
}

/// Line from the world origin to a point.
pub fn line_from_point(point: &GeometricPrimitive) -> AlignResult<GeometricPrimitive> {
    let p = point.effective().as_point()?;
    Ok(GeometricPrimitive::line(Vec3::ZERO, p))
}

/// A line's vector placed at a point. The operands may come in either order.
pub fn line_at_point(
    first: &GeometricPrimitive,
    second: &GeometricPrimitive,
) -> AlignResult<GeometricPrimitive> {
    let (point, line) = match (first.kind(), second.kind()) {
        (PrimitiveKind::Point, PrimitiveKind::Line) => (first, second),
        (PrimitiveKind::Line, PrimitiveKind::Point) => (second, first),
        (PrimitiveKind::Point, found) | (found, PrimitiveKind::Point) => {
            return Err(GeomError::wrong_kind(PrimitiveKind::Line, found).into())
        }
        (found, _) => return Err(GeomError::wrong_kind(PrimitiveKind::Point, found).into()),
    };
    let start = point.effective().as_point()?;
    let (line_start, line_end) = line.effective().as_line()?;
    Ok(GeometricPrimitive::line(start, start + line_vector(line_start, line_end)))
}

/// Line from one point to another.
pub fn line_from_points(start: &GeometricPrimitive, end: &GeometricPrimitive) -> AlignResult<GeometricPrimitive> {
    let a = start.effective().as_point()?;
    let b = end.effective().as_point()?;
    Ok(GeometricPrimitive::line(a, b))
}

fn line_vectors(first: &GeometricPrimitive, second: &GeometricPrimitive) -> AlignResult<(Vec3, Vec3)> {
    let (a_start, a_end) = first.effective().as_line()?;
    let (b_start, b_end) = second.effective().as_line()?;
    Ok((line_vector(a_start, a_end), line_vector(b_start, b_end)))
}

/// Sum of two line vectors, starting at the world origin.
pub fn add_lines(first: &GeometricPrimitive, second: &GeometricPrimitive) -> AlignResult<GeometricPrimitive> {
    let (a, b) = line_vectors(first, second)?;
    Ok(GeometricPrimitive::line(Vec3::ZERO, a + b))
}

/// Difference `first - second` of two line vectors, starting at the world origin.
pub fn subtract_lines(first: &GeometricPrimitive, second: &GeometricPrimitive) -> AlignResult<GeometricPrimitive> {
    let (a, b) = line_vectors(first, second)?;
    Ok(GeometricPrimitive::line(Vec3::ZERO, a - b))
}

/// Point where the infinite line meets the plane.
///
/// The plane is taken through point B with normal `(a - b) × (c - b)`.
///
/// # Errors
///
/// [`AlignError::NoIntersection`] when the line is parallel to the plane or degenerate.
pub fn intersect_line_plane(
    line: &GeometricPrimitive,
    plane: &GeometricPrimitive,
) -> AlignResult<GeometricPrimitive> {
    let (start, end) = line.effective().as_line()?;
    let (a, b, c) = plane.effective().as_plane()?;
    let normal = plane_basis(a, b, c, false, false).normal;
    line_plane_intersection(start, end, b, normal, PARALLEL_TOLERANCE)
        .map(GeometricPrimitive::point)
        .ok_or(AlignError::NoIntersection)
}
