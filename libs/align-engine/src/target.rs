//! Where a solved transform is applied.

use serde::{Deserialize, Serialize};

/// Target of an alignment.
///
/// # Examples
/// ```
/// use align_engine::{MeshScope, TargetSpace};
/// assert!(TargetSpace::ObjectOrigin.moves_object());
/// assert!(TargetSpace::ObjectOrigin.edits_mesh());
/// assert_eq!(TargetSpace::ObjectOrigin.mesh_scope(), Some(MeshScope::Whole));
/// assert_eq!(TargetSpace::ObjectWorld.mesh_scope(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetSpace {
    /// Move the whole object (world-space edit of its world matrix).
    #[default]
    ObjectWorld,
    /// Transform the selected mesh vertices in local space.
    MeshLocalSelected,
    /// Transform every mesh vertex in local space.
    MeshLocalWhole,
    /// Move the object and counter-transform its mesh so only the origin moves.
    ObjectOrigin,
}

/// Which vertices a mesh edit touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeshScope {
    /// Selected vertices only.
    Selected,
    /// All vertices.
    Whole,
}

impl TargetSpace {
    /// `true` when the object's world matrix changes.
    pub fn moves_object(self) -> bool {
        matches!(self, TargetSpace::ObjectWorld | TargetSpace::ObjectOrigin)
    }

    /// `true` when mesh vertex data changes.
    pub fn edits_mesh(self) -> bool {
        self.mesh_scope().is_some()
    }

    /// Vertices affected by the mesh edit, if any.
    pub fn mesh_scope(self) -> Option<MeshScope> {
        match self {
            TargetSpace::ObjectWorld => None,
            TargetSpace::MeshLocalSelected => Some(MeshScope::Selected),
            TargetSpace::MeshLocalWhole | TargetSpace::ObjectOrigin => Some(MeshScope::Whole),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_targets_do_not_move_object() {
        assert!(!TargetSpace::MeshLocalSelected.moves_object());
        assert!(!TargetSpace::MeshLocalWhole.moves_object());
        assert!(TargetSpace::ObjectWorld.moves_object());
    }

    #[test]
    fn scopes_follow_target() {
        assert_eq!(TargetSpace::MeshLocalSelected.mesh_scope(), Some(MeshScope::Selected));
        assert_eq!(TargetSpace::MeshLocalWhole.mesh_scope(), Some(MeshScope::Whole));
        assert!(!TargetSpace::ObjectWorld.edits_mesh());
    }

    #[test]
    fn default_is_object_world() {
        assert_eq!(TargetSpace::default(), TargetSpace::ObjectWorld);
    }
}
