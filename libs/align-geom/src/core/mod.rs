//! Vector/matrix kernel.
//!
//! Includes the glam aliases (`Vec3`, `Mat4`, `Quat`) and the few helpers the
//! solvers need beyond what glam already offers (`add`, `sub`, `dot`, `cross`,
//! `length` and friends are used straight from glam).

pub mod mat4;
pub mod rotation;
pub mod vec3;
