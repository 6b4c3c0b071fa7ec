//! Align Points: translate so the source point lands on the destination point.

use align_geom::core::mat4::translation_matrix;
use align_geom::core::vec3::normalize_or_keep;
use align_geom::{GeometricPrimitive, Mat4, Modifiers, Vec3};
use config::constants::EngineConfig;
use serde::{Deserialize, Serialize};

use crate::error::AlignResult;
use crate::result::{AlignmentResult, ObjectEdit};
use crate::space::{assemble, LocalFrame};
use crate::target::TargetSpace;

/// Options for Align Points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AlignPointsConfig {
    /// Modifiers applied to the translation delta.
    pub modifiers: Modifiers,
    /// Where the translation is applied.
    pub target: TargetSpace,
}

/// World-space delta taking `src_pt` to `dest_pt`, with modifiers applied.
///
/// # Examples
/// ```
/// use align_engine::points::align_points;
/// use align_geom::{Modifiers, Vec3};
/// let delta = align_points(Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0), &Modifiers::new(false, true, 1.0));
/// assert_eq!(delta, Vec3::new(-1.0, -2.0, -3.0));
/// ```
pub fn align_points(src_pt: Vec3, dest_pt: Vec3, modifiers: &Modifiers) -> Vec3 {
    modifiers.apply(dest_pt - src_pt)
}

/// The same delta expressed in `frame`'s local space.
///
/// Both points are mapped to local space before differencing. A unit-length
/// result is divided by the X scale so it stays unit length in world space.
pub fn local_delta(frame: &LocalFrame, start: Vec3, end: Vec3, modifiers: &Modifiers) -> Vec3 {
    let mut delta = frame.to_local(end) - frame.to_local(start);
    if modifiers.make_unit_vector {
        delta = normalize_or_keep(delta) / frame.scale_x();
    }
    if modifiers.flip_direction {
        delta = -delta;
    }
    delta * modifiers.multiplier
}

/// Solves Align Points for two point primitives.
pub fn solve_align_points(
    source: &GeometricPrimitive,
    destination: &GeometricPrimitive,
    config: &AlignPointsConfig,
    world: &Mat4,
    engine: &EngineConfig,
) -> AlignResult<AlignmentResult> {
    let src = source.effective().as_point()?;
    let dest = destination.effective().as_point()?;
    translation_result("align points", src, dest, &config.modifiers, config.target, world, engine)
}

/// Result of a modified translation from `start` to `end`.
pub(crate) fn translation_result(
    operation: &str,
    start: Vec3,
    end: Vec3,
    modifiers: &Modifiers,
    target: TargetSpace,
    world: &Mat4,
    engine: &EngineConfig,
) -> AlignResult<AlignmentResult> {
    assemble(
        operation,
        target,
        world,
        engine,
        || ObjectEdit::Translate(align_points(start, end, modifiers)),
        |frame| translation_matrix(local_delta(frame, start, end, modifiers)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AlignError;
    use align_geom::{GeomError, PrimitiveKind};
    use approx::assert_relative_eq;

    #[test]
    fn plain_delta() {
        let delta = align_points(Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0), &Modifiers::default());
        assert_eq!(delta, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn multiplier_scales_delta() {
        let delta = align_points(Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0), &Modifiers::new(false, false, 2.0));
        assert_eq!(delta, Vec3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn unit_delta_in_scaled_object_stays_unit_in_world() {
        let world = Mat4::from_scale(Vec3::splat(4.0));
        let frame = LocalFrame::new(world, 1e-9).unwrap();
        let modifiers = Modifiers::new(true, false, 1.0);
        let local = local_delta(&frame, Vec3::ZERO, Vec3::new(0.0, 10.0, 0.0), &modifiers);
        assert_relative_eq!(local.y, 0.25, epsilon = 1e-12);
        assert_relative_eq!(world.transform_vector3(local).length(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn unit_delta_in_mirrored_object_keeps_direction() {
        let world = Mat4::from_scale(Vec3::new(-2.0, 2.0, 2.0));
        let frame = LocalFrame::new(world, 1e-9).unwrap();
        let modifiers = Modifiers::new(true, false, 1.0);
        let local = local_delta(&frame, Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0), &modifiers);
        assert!(world.transform_vector3(local).abs_diff_eq(Vec3::X, 1e-12));
    }

    #[test]
    fn mesh_target_moves_vertices_onto_destination() {
        let world = Mat4::from_scale_rotation_translation(
            Vec3::splat(2.0),
            align_geom::Quat::from_rotation_x(0.5),
            Vec3::new(3.0, 0.0, 1.0),
        );
        let src = Vec3::new(1.0, 1.0, 1.0);
        let dest = Vec3::new(-2.0, 4.0, 0.5);
        let config = AlignPointsConfig {
            modifiers: Modifiers::default(),
            target: TargetSpace::MeshLocalSelected,
        };
        let result = solve_align_points(
            &GeometricPrimitive::point(src),
            &GeometricPrimitive::point(dest),
            &config,
            &world,
            &EngineConfig::default(),
        )
        .unwrap();
        assert!(result.object.is_none());
        let local_src = world.inverse().transform_point3(src);
        assert!(result.vertex_world_after(&world, local_src).abs_diff_eq(dest, 1e-9));
    }

    #[test]
    fn rejects_line_operand() {
        let err = solve_align_points(
            &GeometricPrimitive::line(Vec3::ZERO, Vec3::X),
            &GeometricPrimitive::point(Vec3::ONE),
            &AlignPointsConfig::default(),
            &Mat4::IDENTITY,
            &EngineConfig::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            AlignError::Geometry(GeomError::InvalidOperandKind {
                expected: PrimitiveKind::Point,
                found: PrimitiveKind::Line,
            })
        );
    }
}
