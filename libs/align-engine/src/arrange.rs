//! Object arrangement: copying a transform and spacing objects evenly.

use align_geom::core::mat4::{compose, decompose, rotation_matrix, translation_matrix, uniform_scale};
use align_geom::core::vec3::distance_in_direction;
use align_geom::{GeometricPrimitive, Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::{AlignError, AlignResult};

/// World matrix with the target's location and rotation and the current
/// object's X scale applied uniformly.
///
/// # Examples
/// ```
/// use align_engine::arrange::match_object_transform;
/// use align_geom::{Mat4, Vec3};
/// let target = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
/// let current = Mat4::from_scale(Vec3::new(2.0, 5.0, 5.0));
/// let m = match_object_transform(&target, &current);
/// assert!(m.abs_diff_eq(Mat4::from_scale_rotation_translation(Vec3::splat(2.0), Default::default(), Vec3::new(1.0, 2.0, 3.0)), 1e-12));
/// ```
pub fn match_object_transform(target_world: &Mat4, current_world: &Mat4) -> Mat4 {
    let (_, rotation, translation) = decompose(target_world);
    let (scale, _, _) = decompose(current_world);
    compose(
        compose(translation_matrix(translation), rotation_matrix(rotation)),
        uniform_scale(scale.x),
    )
}

/// Spacing options for object distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DistributeOptions {
    /// Keep the caller's order instead of sorting along the direction.
    pub keep_order: bool,
    /// Leave a gap before the first object.
    pub offset_start: bool,
    /// Leave a gap after the last object.
    pub offset_end: bool,
}

/// New locations spacing `positions` evenly from `start` to `end`.
///
/// The returned vector is indexed like `positions`. Unless `keep_order` is
/// set, objects are ranked by their signed distance along `start → end`
/// (stable for ties).
///
/// # Errors
///
/// [`AlignError::EmptyDistribution`] when `positions` is empty.
///
/// # Examples
/// ```
/// use align_engine::arrange::{distribute_between, DistributeOptions};
/// use align_geom::Vec3;
/// let positions = [Vec3::new(9.0, 1.0, 0.0), Vec3::new(0.5, 0.0, 0.0), Vec3::new(3.0, 0.0, 0.0)];
/// let placed = distribute_between(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), &positions, DistributeOptions::default()).unwrap();
/// assert_eq!(placed, vec![Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0)]);
/// ```
pub fn distribute_between(
    start: Vec3,
    end: Vec3,
    positions: &[Vec3],
    options: DistributeOptions,
) -> AlignResult<Vec<Vec3>> {
    let count = positions.len();
    if count == 0 {
        return Err(AlignError::EmptyDistribution);
    }

    let mut order: Vec<usize> = (0..count).collect();
    if !options.keep_order {
        order.sort_by(|&a, &b| {
            distance_in_direction(start, end, positions[a])
                .total_cmp(&distance_in_direction(start, end, positions[b]))
        });
    }

    let several = count > 1;
    let mut gaps = if several { count - 1 } else { count };
    let mut first_slot = 0;
    if options.offset_start {
        first_slot = 1;
        if several {
            gaps += 1;
        }
    }
    if options.offset_end {
        gaps += 1;
    }
    let step = (end - start) / gaps as f64;

    let mut placed = vec![Vec3::ZERO; count];
    for (rank, &index) in order.iter().enumerate() {
        placed[index] = start + step * (rank + first_slot) as f64;
    }
    Ok(placed)
}

/// [`distribute_between`] along a line primitive's effective geometry.
pub fn distribute_along_line(
    line: &GeometricPrimitive,
    positions: &[Vec3],
    options: DistributeOptions,
) -> AlignResult<Vec<Vec3>> {
    let (start, end) = line.effective().as_line()?;
    distribute_between(start, end, positions, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use align_geom::Quat;

    fn span() -> (Vec3, Vec3) {
        (Vec3::ZERO, Vec3::new(0.0, 12.0, 0.0))
    }

    #[test]
    fn empty_input_is_an_error() {
        let (start, end) = span();
        assert_eq!(
            distribute_between(start, end, &[], DistributeOptions::default()),
            Err(AlignError::EmptyDistribution)
        );
    }

    #[test]
    fn single_object_lands_on_start() {
        let (start, end) = span();
        let placed = distribute_between(start, end, &[Vec3::ONE], DistributeOptions::default()).unwrap();
        assert_eq!(placed, vec![start]);
    }

    #[test]
    fn keep_order_skips_sorting() {
        let (start, end) = span();
        let positions = [Vec3::new(0.0, 11.0, 0.0), Vec3::new(0.0, 1.0, 0.0)];
        let options = DistributeOptions {
            keep_order: true,
            ..DistributeOptions::default()
        };
        let placed = distribute_between(start, end, &positions, options).unwrap();
        assert_eq!(placed, vec![start, end]);
    }

    #[test]
    fn offsets_add_gaps_at_both_ends() {
        let (start, end) = span();
        let positions = [Vec3::ZERO, Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, 6.0, 0.0)];
        let options = DistributeOptions {
            keep_order: false,
            offset_start: true,
            offset_end: true,
        };
        let placed = distribute_between(start, end, &positions, options).unwrap();
        assert_eq!(
            placed,
            vec![Vec3::new(0.0, 3.0, 0.0), Vec3::new(0.0, 6.0, 0.0), Vec3::new(0.0, 9.0, 0.0)]
        );
    }

    #[test]
    fn offset_end_only() {
        let (start, end) = span();
        let positions = [Vec3::ZERO, Vec3::new(0.0, 5.0, 0.0)];
        let options = DistributeOptions {
            offset_end: true,
            ..DistributeOptions::default()
        };
        let placed = distribute_between(start, end, &positions, options).unwrap();
        assert_eq!(placed, vec![Vec3::ZERO, Vec3::new(0.0, 6.0, 0.0)]);
    }

    #[test]
    fn along_line_uses_effective_end() {
        let line = GeometricPrimitive::line(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0))
            .with_modifiers(align_geom::Modifiers::new(false, false, 4.0));
        let positions = [Vec3::ZERO, Vec3::ONE, Vec3::new(2.0, 0.0, 0.0)];
        let placed = distribute_along_line(&line, &positions, DistributeOptions::default()).unwrap();
        assert_eq!(placed[2], Vec3::new(4.0, 0.0, 0.0));
    }

    #[test]
    fn matched_transform_keeps_current_scale() {
        let target = Mat4::from_scale_rotation_translation(
            Vec3::splat(7.0),
            Quat::from_rotation_z(0.5),
            Vec3::new(1.0, 0.0, 0.0),
        );
        let current = Mat4::from_scale(Vec3::splat(3.0));
        let m = match_object_transform(&target, &current);
        let (scale, rotation, translation) = m.to_scale_rotation_translation();
        assert!(scale.abs_diff_eq(Vec3::splat(3.0), 1e-9));
        assert!(translation.abs_diff_eq(Vec3::X, 1e-12));
        assert!(rotation.abs_diff_eq(Quat::from_rotation_z(0.5), 1e-9));
    }
}
