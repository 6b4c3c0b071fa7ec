//! Axis Rotate: rotate about a line by a fixed amount.

use align_geom::core::mat4::{about_pivot, rotation_matrix};
use align_geom::core::rotation::axis_angle;
use align_geom::{line_vector, GeometricPrimitive, Mat4, Vec3};
use config::constants::EngineConfig;
use serde::{Deserialize, Serialize};

use crate::error::AlignResult;
use crate::result::{AlignmentResult, ObjectEdit};
use crate::space::assemble;
use crate::target::TargetSpace;

/// Options for Axis Rotate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisRotateConfig {
    /// Rotation amount in the engine's configured angle unit.
    pub amount: f64,
    /// Where the transform is applied.
    pub target: TargetSpace,
}

/// Rotation by `radians` about the line `axis_start → axis_end`; `axis_start` stays fixed.
///
/// # Examples
/// ```
/// use align_engine::axis_rotate::axis_rotate;
/// use align_geom::Vec3;
/// let m = axis_rotate(Vec3::new(1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 2.0), std::f64::consts::PI);
/// assert!(m.transform_point3(Vec3::ZERO).abs_diff_eq(Vec3::new(2.0, 0.0, 0.0), 1e-12));
/// ```
pub fn axis_rotate(axis_start: Vec3, axis_end: Vec3, radians: f64) -> Mat4 {
    let rotation = axis_angle(line_vector(axis_start, axis_end), radians);
    about_pivot(axis_start, rotation_matrix(rotation))
}

/// Solves Axis Rotate for a line primitive.
pub fn solve_axis_rotate(
    axis: &GeometricPrimitive,
    config: &AxisRotateConfig,
    world: &Mat4,
    engine: &EngineConfig,
) -> AlignResult<AlignmentResult> {
    let (start, end) = axis.effective().as_line()?;
    let radians = engine.angle_unit.to_radians(config.amount);
    assemble(
        "axis rotate",
        config.target,
        world,
        engine,
        || ObjectEdit::Transform(axis_rotate(start, end, radians)),
        |frame| axis_rotate(frame.to_local(start), frame.to_local(end), radians),
    )
}
