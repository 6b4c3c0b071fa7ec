//! Scale Match Edge: uniform scale so the source edge matches the destination length.
//!
//! Scaling to a numeric length is the same operation with a destination line
//! whose modifiers are `make_unit_vector` plus `multiplier = length`.

use align_geom::core::mat4::{pivot_to_pivot, uniform_scale};
use align_geom::{GeometricPrimitive, Mat4, Vec3};
use config::constants::EngineConfig;
use serde::{Deserialize, Serialize};

use crate::error::{AlignError, AlignResult};
use crate::result::{AlignmentResult, ObjectEdit};
use crate::space::assemble;
use crate::target::TargetSpace;

/// Where the source start point ends up after scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleAnchor {
    /// Source start stays where it is.
    #[default]
    KeepSource,
    /// Source start lands on the destination start.
    ToDestination,
}

/// Options for Scale Match Edge.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScaleMatchConfig {
    /// Placement of the scale pivot.
    pub anchor: ScaleAnchor,
    /// Where the transform is applied.
    pub target: TargetSpace,
}

/// `|dest| / |src|`, failing when either edge has zero length.
///
/// # Examples
/// ```
/// use align_engine::scale_edge::scale_factor;
/// use align_geom::Vec3;
/// let f = scale_factor(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), Vec3::ZERO, Vec3::new(0.0, 6.0, 0.0)).unwrap();
/// assert_eq!(f, 3.0);
/// assert!(scale_factor(Vec3::ONE, Vec3::ONE, Vec3::ZERO, Vec3::X).is_err());
/// ```
pub fn scale_factor(src_start: Vec3, src_end: Vec3, dest_start: Vec3, dest_end: Vec3) -> AlignResult<f64> {
    let source_length = (src_end - src_start).length();
    let destination_length = (dest_end - dest_start).length();
    if source_length == 0.0 || destination_length == 0.0 {
        return Err(AlignError::DegenerateEdge {
            source_length,
            destination_length,
        });
    }
    Ok(destination_length / source_length)
}

/// Pivot-correct scale by `factor` about `src_start`, anchored per `anchor`.
pub fn scale_about(factor: f64, src_start: Vec3, dest_start: Vec3, anchor: ScaleAnchor) -> Mat4 {
    let pivot = match anchor {
        ScaleAnchor::KeepSource => src_start,
        ScaleAnchor::ToDestination => dest_start,
    };
    pivot_to_pivot(src_start, uniform_scale(factor), pivot)
}

/// Solves Scale Match Edge for two line primitives.
///
/// The factor comes from the world-space lengths and is reused unchanged by
/// the mesh-level matrix, whose pivots are the local edge start points.
pub fn solve_scale_match_edge(
    source: &GeometricPrimitive,
    destination: &GeometricPrimitive,
    config: &ScaleMatchConfig,
    world: &Mat4,
    engine: &EngineConfig,
) -> AlignResult<AlignmentResult> {
    let (src_start, src_end) = source.effective().as_line()?;
    let (dest_start, dest_end) = destination.effective().as_line()?;
    let factor = scale_factor(src_start, src_end, dest_start, dest_end)?;
    let anchor = config.anchor;
    assemble(
        "scale match edge",
        config.target,
        world,
        engine,
        || ObjectEdit::Transform(scale_about(factor, src_start, dest_start, anchor)),
        |frame| scale_about(factor, frame.to_local(src_start), frame.to_local(dest_start), anchor),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn edges() -> (GeometricPrimitive, GeometricPrimitive) {
        (
            GeometricPrimitive::line(Vec3::new(1.0, 1.0, 0.0), Vec3::new(3.0, 1.0, 0.0)),
            GeometricPrimitive::line(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, 5.0, 6.0)),
        )
    }

    #[test]
    fn factor_is_length_ratio() {
        let f = scale_factor(Vec3::ZERO, Vec3::new(0.0, 2.0, 0.0), Vec3::ONE, Vec3::new(1.0, 1.0, 7.0)).unwrap();
        assert_eq!(f, 3.0);
    }

    #[test]
    fn zero_length_edge_is_degenerate() {
        let err = scale_factor(Vec3::ONE, Vec3::ONE, Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0)).unwrap_err();
        assert_eq!(
            err,
            AlignError::DegenerateEdge {
                source_length: 0.0,
                destination_length: 4.0,
            }
        );
        assert!(scale_factor(Vec3::ZERO, Vec3::X, Vec3::ONE, Vec3::ONE).is_err());
    }

    #[test]
    fn object_scale_keeps_source_start_fixed() {
        let (source, destination) = edges();
        let result = solve_scale_match_edge(
            &source,
            &destination,
            &ScaleMatchConfig::default(),
            &Mat4::IDENTITY,
            &EngineConfig::default(),
        )
        .unwrap();
        let m = result.world_after(&Mat4::IDENTITY);
        assert!(m.transform_point3(Vec3::new(1.0, 1.0, 0.0)).abs_diff_eq(Vec3::new(1.0, 1.0, 0.0), 1e-12));
        let new_end = m.transform_point3(Vec3::new(3.0, 1.0, 0.0));
        assert_relative_eq!((new_end - Vec3::new(1.0, 1.0, 0.0)).length(), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn destination_anchor_moves_start_onto_destination() {
        let m = scale_about(3.0, Vec3::new(1.0, 1.0, 0.0), Vec3::new(0.0, 5.0, 0.0), ScaleAnchor::ToDestination);
        assert!(m.transform_point3(Vec3::new(1.0, 1.0, 0.0)).abs_diff_eq(Vec3::new(0.0, 5.0, 0.0), 1e-12));
    }

    #[test]
    fn mesh_scale_matches_object_scale_under_uniform_scale() {
        let (source, destination) = edges();
        let world = Mat4::from_scale_rotation_translation(
            Vec3::splat(1.5),
            align_geom::Quat::from_rotation_z(-0.6),
            Vec3::new(2.0, 0.0, 1.0),
        );
        let engine = EngineConfig::default();
        let object = solve_scale_match_edge(&source, &destination, &ScaleMatchConfig::default(), &world, &engine).unwrap();
        let mesh = solve_scale_match_edge(
            &source,
            &destination,
            &ScaleMatchConfig {
                anchor: ScaleAnchor::KeepSource,
                target: TargetSpace::MeshLocalWhole,
            },
            &world,
            &engine,
        )
        .unwrap();
        let local = Vec3::new(1.0, -1.0, 0.5);
        assert!(object
            .vertex_world_after(&world, local)
            .abs_diff_eq(mesh.vertex_world_after(&world, local), 1e-9));
    }

    #[test]
    fn numeric_length_through_destination_modifiers() {
        let source = GeometricPrimitive::line(Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0));
        let destination = GeometricPrimitive::line(Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0))
            .with_modifiers(align_geom::Modifiers::new(true, false, 10.0));
        let (ds, de) = destination.effective().as_line().unwrap();
        let f = scale_factor(Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0), ds, de).unwrap();
        assert_relative_eq!(f, 2.5, epsilon = 1e-12);
        assert!(solve_scale_match_edge(
            &source,
            &destination,
            &ScaleMatchConfig::default(),
            &Mat4::IDENTITY,
            &EngineConfig::default()
        )
        .is_ok());
    }
}
