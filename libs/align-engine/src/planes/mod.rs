//! Align Planes and its "set origin" mode.
//!
//! The rotation is built in two steps. The first rotation makes the plane
//! normals parallel. The second is computed from the *already rotated* source
//! leading edge and turns it onto the destination leading edge inside the now
//! shared plane. The pivot is then carried onto the destination pivot:
//!
//! ```text
//! T(dest_pivot) * rot2 * rot1 * T(-src_pivot)
//! ```
//!
//! The same pivot choice is used for both planes. `flip_normal` negates the
//! source normal only, which turns the aligned object over; negating both
//! normals would leave the result unchanged.

use std::f64::consts::PI;

use align_geom::core::mat4::{pivot_to_pivot, rotation_matrix, transform_point};
use align_geom::core::rotation::rotation_between;
use align_geom::derive::plane_orientation;
use align_geom::{plane_basis, GeometricPrimitive, Mat3, Mat4, PlaneBasis, Quat, Vec3};
use config::constants::{EngineConfig, EPSILON, SET_ORIGIN_AXIS_POINTS};
use serde::{Deserialize, Serialize};

use crate::error::AlignResult;
use crate::result::{AlignmentResult, ObjectEdit};
use crate::space::assemble;
use crate::target::TargetSpace;

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Options for Align Planes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AlignPlanesConfig {
    /// Use point A instead of point B as the pivot of both planes.
    pub pivot_is_a: bool,
    /// Negate the source normal.
    pub flip_normal: bool,
    /// Where the transform is applied.
    pub target: TargetSpace,
}

/// Options for the "set origin" mode of Align Planes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SetOriginConfig {
    /// Land the origin on destination point A instead of point B.
    pub pivot_is_a: bool,
}

// =============================================================================
// CORE ALGORITHM
// =============================================================================

/// The two rotations of a plane alignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneRotation {
    /// Rotation making the normals parallel.
    pub normals: Quat,
    /// Rotation, applied second, making the leading edges parallel.
    pub edges: Quat,
}

impl PlaneRotation {
    /// Computes both rotations for `src` onto `dest`.
    ///
    /// Opposed leading edges turn a half turn about the destination normal, so
    /// the plane is never flipped by the second step.
    pub fn between(src: &PlaneBasis, dest: &PlaneBasis) -> Self {
        let normals = rotation_between(src.normal, dest.normal);
        let edge = normals * src.leading_edge;
        let edges = if opposed(edge, dest.leading_edge) && dest.normal.length() > EPSILON {
            Quat::from_axis_angle(dest.normal.normalize(), PI)
        } else {
            rotation_between(edge, dest.leading_edge)
        };
        Self { normals, edges }
    }

    /// `edges * normals`: the normal rotation is applied first.
    pub fn combined(&self) -> Quat {
        self.edges * self.normals
    }
}

fn opposed(u: Vec3, v: Vec3) -> bool {
    let (u_len, v_len) = (u.length(), v.length());
    u_len > EPSILON && v_len > EPSILON && u.dot(v) <= (-1.0 + EPSILON) * u_len * v_len
}

/// Rigid transform aligning the plane with basis `src` onto the plane with basis `dest`.
pub fn plane_transform(src: &PlaneBasis, dest: &PlaneBasis) -> Mat4 {
    let rotation = PlaneRotation::between(src, dest).combined();
    pivot_to_pivot(src.pivot, rotation_matrix(rotation), dest.pivot)
}

/// Rigid transform aligning the source plane onto the destination plane.
///
/// # Examples
/// ```
/// use align_engine::planes::align_planes;
/// use align_geom::Vec3;
/// let src = [Vec3::X, Vec3::ZERO, Vec3::Y];
/// let dest = [Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)];
/// let m = align_planes(src, dest, false, false);
/// // Leading edge B→A now runs along +Z.
/// assert!(m.transform_point3(Vec3::X).abs_diff_eq(Vec3::Z, 1e-12));
/// ```
pub fn align_planes(src: [Vec3; 3], dest: [Vec3; 3], pivot_is_a: bool, flip_normal: bool) -> Mat4 {
    let [sa, sb, sc] = src;
    let [da, db, dc] = dest;
    plane_transform(
        &plane_basis(sa, sb, sc, pivot_is_a, flip_normal),
        &plane_basis(da, db, dc, pivot_is_a, false),
    )
}

fn plane_points(primitive: &GeometricPrimitive) -> AlignResult<[Vec3; 3]> {
    let (a, b, c) = primitive.effective().as_plane()?;
    Ok([a, b, c])
}

fn map_points(points: [Vec3; 3], m: &Mat4) -> [Vec3; 3] {
    points.map(|p| transform_point(m, p))
}

// =============================================================================
// SOLVERS
// =============================================================================

/// Solves Align Planes for two plane primitives.
pub fn solve_align_planes(
    source: &GeometricPrimitive,
    destination: &GeometricPrimitive,
    config: &AlignPlanesConfig,
    world: &Mat4,
    engine: &EngineConfig,
) -> AlignResult<AlignmentResult> {
    let src = plane_points(source)?;
    let dest = plane_points(destination)?;
    let AlignPlanesConfig {
        pivot_is_a,
        flip_normal,
        target,
    } = *config;
    assemble(
        "align planes",
        target,
        world,
        engine,
        || ObjectEdit::Transform(align_planes(src, dest, pivot_is_a, flip_normal)),
        |frame| {
            let to_local = frame.inverse();
            align_planes(
                map_points(src, &to_local),
                map_points(dest, &to_local),
                pivot_is_a,
                flip_normal,
            )
        },
    )
}

/// Source triangle of "set origin" mode: the object's local axis points in world space.
pub fn set_origin_source(world: &Mat4) -> [Vec3; 3] {
    SET_ORIGIN_AXIS_POINTS.map(|p| transform_point(world, Vec3::from_array(p)))
}

/// Solves "set origin" mode: relocates the object origin onto the destination
/// plane while the mesh stays where it is.
///
/// Runs the Align Planes algorithm with the object's own axis triangle as the
/// source (see [`set_origin_transform`]), always with an `ObjectOrigin` target.
pub fn solve_set_origin(
    destination: &GeometricPrimitive,
    config: &SetOriginConfig,
    world: &Mat4,
    engine: &EngineConfig,
) -> AlignResult<AlignmentResult> {
    let src = set_origin_source(world);
    let dest = plane_points(destination)?;
    let pivot_is_a = config.pivot_is_a;
    assemble(
        "set origin",
        TargetSpace::ObjectOrigin,
        world,
        engine,
        || ObjectEdit::Transform(set_origin_transform(src, dest, pivot_is_a)),
        |frame| {
            let to_local = frame.inverse();
            set_origin_transform(map_points(src, &to_local), map_points(dest, &to_local), pivot_is_a)
        },
    )
}

/// Transform carrying the axis triangle `src` onto the destination plane.
///
/// The source pivot is always the object origin (`src[1]`). With
/// `pivot_is_a` the source leading edge runs from the X tip back to the
/// origin and the destination pivot is point A; the destination edge stays B→A.
pub fn set_origin_transform(src: [Vec3; 3], dest: [Vec3; 3], pivot_is_a: bool) -> Mat4 {
    let [tip, origin, y_tip] = src;
    let [da, db, dc] = dest;
    let mut source = if pivot_is_a {
        plane_basis(origin, tip, y_tip, false, false)
    } else {
        plane_basis(tip, origin, y_tip, false, false)
    };
    source.pivot = origin;
    let mut target = plane_basis(da, db, dc, false, false);
    if pivot_is_a {
        target.pivot = da;
    }
    plane_transform(&source, &target)
}

/// Orientation for sliding along the destination face after an alignment.
///
/// See [`plane_orientation`] for the column layout.
pub fn destination_orientation(destination: &GeometricPrimitive, pivot_is_a: bool) -> AlignResult<Mat3> {
    let [a, b, c] = plane_points(destination)?;
    Ok(plane_orientation(&plane_basis(a, b, c, pivot_is_a, false)))
}
