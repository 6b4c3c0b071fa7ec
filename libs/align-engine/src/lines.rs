//! Align Lines: rotate the source line onto the destination line's direction
//! and carry its start point onto the destination start.

use align_geom::core::mat4::{pivot_to_pivot, rotation_matrix};
use align_geom::core::rotation::rotation_between;
use align_geom::{line_vector, GeometricPrimitive, Mat4, Vec3};
use config::constants::EngineConfig;
use serde::{Deserialize, Serialize};

use crate::error::AlignResult;
use crate::result::{AlignmentResult, ObjectEdit};
use crate::space::assemble;
use crate::target::TargetSpace;

/// Options for Align Lines.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AlignLinesConfig {
    /// Reverse the source line before aligning.
    pub flip_direction: bool,
    /// Where the transform is applied.
    pub target: TargetSpace,
}

/// Rigid transform taking the source line onto the destination line.
///
/// # Examples
/// ```
/// use align_engine::lines::align_lines;
/// use align_geom::Vec3;
/// let m = align_lines(Vec3::ZERO, Vec3::X, Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 3.0, 5.0), false);
/// assert!(m.transform_point3(Vec3::X).abs_diff_eq(Vec3::new(0.0, 1.0, 5.0), 1e-12));
/// ```
pub fn align_lines(
    src_start: Vec3,
    src_end: Vec3,
    dest_start: Vec3,
    dest_end: Vec3,
    flip_direction: bool,
) -> Mat4 {
    let mut src = line_vector(src_start, src_end);
    if flip_direction {
        src = -src;
    }
    let rotation = rotation_between(src, line_vector(dest_start, dest_end));
    pivot_to_pivot(src_start, rotation_matrix(rotation), dest_start)
}

/// Solves Align Lines for two line primitives.
pub fn solve_align_lines(
    source: &GeometricPrimitive,
    destination: &GeometricPrimitive,
    config: &AlignLinesConfig,
    world: &Mat4,
    engine: &EngineConfig,
) -> AlignResult<AlignmentResult> {
    let (src_start, src_end) = source.effective().as_line()?;
    let (dest_start, dest_end) = destination.effective().as_line()?;
    let flip = config.flip_direction;
    assemble(
        "align lines",
        config.target,
        world,
        engine,
        || ObjectEdit::Transform(align_lines(src_start, src_end, dest_start, dest_end, flip)),
        |frame| {
            align_lines(
                frame.to_local(src_start),
                frame.to_local(src_end),
                frame.to_local(dest_start),
                frame.to_local(dest_end),
                flip,
            )
        },
    )
}
