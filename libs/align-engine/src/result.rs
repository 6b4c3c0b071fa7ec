//! Solver output: edits the host applies after a successful solve.

use align_geom::core::mat4::{compose, transform_point, translation_matrix};
use align_geom::{Mat4, Vec3};

use crate::target::MeshScope;

/// World-space change to an object's world matrix.
///
/// The edit is pre-multiplied: `new_world = edit * old_world`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObjectEdit {
    /// Pure translation of the object location.
    Translate(Vec3),
    /// General rigid or scale delta.
    Transform(Mat4),
}

impl ObjectEdit {
    /// Edit as a matrix.
    pub fn matrix(&self) -> Mat4 {
        match *self {
            ObjectEdit::Translate(delta) => translation_matrix(delta),
            ObjectEdit::Transform(m) => m,
        }
    }

    /// World matrix after the edit.
    pub fn apply(&self, world: &Mat4) -> Mat4 {
        compose(self.matrix(), *world)
    }
}

/// Local-space transform for mesh vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshEdit {
    /// Matrix applied to local vertex positions.
    pub matrix: Mat4,
    /// Vertices to transform.
    pub scope: MeshScope,
}

/// Complete outcome of one solve.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AlignmentResult {
    /// Edit of the object's world matrix.
    pub object: Option<ObjectEdit>,
    /// Edit of the object's mesh data.
    pub mesh: Option<MeshEdit>,
}

impl AlignmentResult {
    /// Result that only moves the object.
    pub fn object_only(edit: ObjectEdit) -> Self {
        Self {
            object: Some(edit),
            mesh: None,
        }
    }

    /// Result that only edits mesh data.
    pub fn mesh_only(edit: MeshEdit) -> Self {
        Self {
            object: None,
            mesh: Some(edit),
        }
    }

    /// World matrix after applying the object edit to `world`.
    pub fn world_after(&self, world: &Mat4) -> Mat4 {
        self.object
            .map(|edit| edit.apply(world))
            .unwrap_or(*world)
    }

    /// Mesh matrix, identity when the mesh is untouched.
    pub fn mesh_matrix(&self) -> Mat4 {
        self.mesh.map(|edit| edit.matrix).unwrap_or(Mat4::IDENTITY)
    }

    /// World position of the local vertex `local` after both edits.
    ///
    /// # Examples
    /// ```
    /// use align_engine::{AlignmentResult, ObjectEdit};
    /// use align_geom::{Mat4, Vec3};
    /// let result = AlignmentResult::object_only(ObjectEdit::Translate(Vec3::X));
    /// let p = result.vertex_world_after(&Mat4::IDENTITY, Vec3::ZERO);
    /// assert_eq!(p, Vec3::X);
    /// ```
    pub fn vertex_world_after(&self, world: &Mat4, local: Vec3) -> Vec3 {
        transform_point(&self.world_after(world), transform_point(&self.mesh_matrix(), local))
    }
}
