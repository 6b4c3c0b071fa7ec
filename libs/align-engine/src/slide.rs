//! Directional Slide: translate along a line's direction.

use align_geom::{GeometricPrimitive, Mat4, Modifiers, Vec3};
use config::constants::EngineConfig;
use serde::{Deserialize, Serialize};

use crate::error::AlignResult;
use crate::points::{align_points, translation_result};
use crate::result::AlignmentResult;
use crate::target::TargetSpace;

/// Options for Directional Slide.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SlideConfig {
    /// Modifiers applied to the direction vector.
    pub modifiers: Modifiers,
    /// Where the translation is applied.
    pub target: TargetSpace,
}

/// World-space slide vector for the direction `dir_start → dir_end`.
///
/// # Examples
/// ```
/// use align_engine::slide::slide;
/// use align_geom::{Modifiers, Vec3};
/// let v = slide(Vec3::ONE, Vec3::new(1.0, 1.0, 9.0), &Modifiers::new(true, false, 3.0));
/// assert_eq!(v, Vec3::new(0.0, 0.0, 3.0));
/// ```
pub fn slide(dir_start: Vec3, dir_end: Vec3, modifiers: &Modifiers) -> Vec3 {
    align_points(dir_start, dir_end, modifiers)
}

/// Solves Directional Slide for a line primitive.
///
/// The line's own modifiers shape its effective geometry first; `config.modifiers`
/// then apply to the resulting direction vector.
pub fn solve_slide(
    direction: &GeometricPrimitive,
    config: &SlideConfig,
    world: &Mat4,
    engine: &EngineConfig,
) -> AlignResult<AlignmentResult> {
    let (start, end) = direction.effective().as_line()?;
    translation_result("directional slide", start, end, &config.modifiers, config.target, world, engine)
}
