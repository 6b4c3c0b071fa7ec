//! Transform space adapter.
//!
//! Mesh-level solves transform the *operands* into the object's local frame
//! and build the output matrix from those local points. World transforms are
//! never conjugated into local space.
//!
//! All mesh-level paths assume uniform object scale. Each one logs a warning
//! and proceeds; results under non-uniform scale are not guaranteed.

use align_geom::core::mat4::{compose, decompose, has_uniform_scale, invert, transform_point};
use align_geom::{Mat4, Vec3};
use config::constants::EngineConfig;
use tracing::warn;

use crate::error::AlignResult;
use crate::result::{AlignmentResult, MeshEdit, ObjectEdit};
use crate::target::{MeshScope, TargetSpace};

/// An object's world matrix together with its inverse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalFrame {
    world: Mat4,
    inverse: Mat4,
}

impl LocalFrame {
    /// Builds the frame, failing when `world` is singular.
    ///
    /// # Examples
    /// ```
    /// use align_engine::space::LocalFrame;
    /// use align_geom::{Mat4, Vec3};
    /// let frame = LocalFrame::new(Mat4::from_translation(Vec3::X), 1e-9).unwrap();
    /// assert_eq!(frame.to_local(Vec3::X), Vec3::ZERO);
    /// assert!(LocalFrame::new(Mat4::ZERO, 1e-9).is_err());
    /// ```
    pub fn new(world: Mat4, tolerance: f64) -> AlignResult<Self> {
        let inverse = invert(&world, tolerance)?;
        Ok(Self { world, inverse })
    }

    /// Local-to-world matrix.
    pub fn world(&self) -> Mat4 {
        self.world
    }

    /// World-to-local matrix.
    pub fn inverse(&self) -> Mat4 {
        self.inverse
    }

    /// Maps a world point into local space.
    pub fn to_local(&self, p: Vec3) -> Vec3 {
        transform_point(&self.inverse, p)
    }

    /// Maps a local point into world space.
    pub fn to_world(&self, p: Vec3) -> Vec3 {
        transform_point(&self.world, p)
    }

    /// Magnitude of the decomposed X scale.
    ///
    /// Unit-length local deltas are divided by this to stay unit length in
    /// world space under uniform scale. A mirror shows up as a negative X
    /// scale; the inverse matrix already carries it, so only the magnitude is used.
    pub fn scale_x(&self) -> f64 {
        decompose(&self.world).0.x.abs()
    }

    /// Logs the uniform-scale assumption for a mesh-level `operation`.
    pub fn warn_mesh_level(&self, operation: &str, tolerance: f64) {
        let (scale, _, _) = decompose(&self.world);
        let uniform = has_uniform_scale(&self.world, tolerance.max(1.0e-6));
        warn!(
            operation,
            ?scale,
            uniform,
            "mesh-level transforms assume uniform object scale"
        );
    }
}

/// Assembles the result for `target` from the two forms of one operation.
///
/// `object_edit` is the world-space delta for the object. `local_matrix`
/// builds the equivalent mesh transform from operands mapped through the
/// given frame. `ObjectOrigin` applies the object edit plus the mesh matrix
/// `inverse(new_world) * old_world`, which keeps every vertex fixed in world space.
pub(crate) fn assemble(
    operation: &str,
    target: TargetSpace,
    world: &Mat4,
    config: &EngineConfig,
    object_edit: impl FnOnce() -> ObjectEdit,
    local_matrix: impl FnOnce(&LocalFrame) -> Mat4,
) -> AlignResult<AlignmentResult> {
    let config = config.validated()?;
    match target {
        TargetSpace::ObjectWorld => Ok(AlignmentResult::object_only(object_edit())),
        TargetSpace::MeshLocalSelected | TargetSpace::MeshLocalWhole => {
            let frame = LocalFrame::new(*world, config.tolerance)?;
            frame.warn_mesh_level(operation, config.tolerance);
            let scope = if target == TargetSpace::MeshLocalSelected {
                MeshScope::Selected
            } else {
                MeshScope::Whole
            };
            Ok(AlignmentResult::mesh_only(MeshEdit {
                matrix: local_matrix(&frame),
                scope,
            }))
        }
        TargetSpace::ObjectOrigin => {
            let edit = object_edit();
            let moved = LocalFrame::new(edit.apply(world), config.tolerance)?;
            moved.warn_mesh_level(operation, config.tolerance);
            Ok(AlignmentResult {
                object: Some(edit),
                mesh: Some(MeshEdit {
                    matrix: compose(moved.inverse(), *world),
                    scope: MeshScope::Whole,
                }),
            })
        }
    }
}
