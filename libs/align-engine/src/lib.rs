//! # Align-Engine
//!
//! Source → destination alignment solvers built on [`align_geom`].
//!
//! Each solver reads the effective geometry of its operands, builds one
//! transform and packages it for the requested [`TargetSpace`]:
//!
//! - `ObjectWorld` edits the object's world matrix only.
//! - `MeshLocalSelected` / `MeshLocalWhole` transform local vertex data.
//! - `ObjectOrigin` moves the object and counter-transforms the mesh.
//!
//! The engine holds no state. A host passes the object's world matrix in and
//! applies the returned [`AlignmentResult`] itself.
//!
//! ## Example
//!
//! ```rust
//! use align_engine::{solve, AlignmentRequest};
//! use align_engine::lines::AlignLinesConfig;
//! use align_geom::{GeometricPrimitive, Mat4, Vec3};
//! use config::constants::EngineConfig;
//!
//! let request = AlignmentRequest::Lines {
//!     source: GeometricPrimitive::line(Vec3::ZERO, Vec3::X),
//!     destination: GeometricPrimitive::line(Vec3::new(0.0, 0.0, 2.0), Vec3::new(0.0, 5.0, 2.0)),
//!     config: AlignLinesConfig::default(),
//! };
//! let world = Mat4::IDENTITY;
//! let result = solve(&request, &world, &EngineConfig::default()).unwrap();
//! let moved = result.world_after(&world).transform_point3(Vec3::X);
//! assert!(moved.abs_diff_eq(Vec3::new(0.0, 1.0, 2.0), 1e-12));
//! ```

pub mod arrange;
pub mod axis_rotate;
pub mod compose;
pub mod error;
pub mod lines;
pub mod planes;
pub mod points;
pub mod request;
pub mod result;
pub mod scale_edge;
pub mod slide;
pub mod space;
pub mod target;

pub use arrange::DistributeOptions;
pub use axis_rotate::AxisRotateConfig;
pub use error::{AlignError, AlignResult};
pub use lines::AlignLinesConfig;
pub use planes::{AlignPlanesConfig, SetOriginConfig};
pub use points::AlignPointsConfig;
pub use request::{solve, AlignmentRequest};
pub use result::{AlignmentResult, MeshEdit, ObjectEdit};
pub use scale_edge::{ScaleAnchor, ScaleMatchConfig};
pub use slide::SlideConfig;
pub use space::LocalFrame;
pub use target::{MeshScope, TargetSpace};

#[cfg(test)]
mod tests;
