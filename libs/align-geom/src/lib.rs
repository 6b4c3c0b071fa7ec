//! # Align-Geom
//!
//! Vector/matrix kernel and geometric primitives for the alignment engine.
//!
//! A [`GeometricPrimitive`] stores raw coordinates plus per-primitive
//! [`Modifiers`]. Solvers never read the raw coordinates directly: they ask
//! for [`EffectiveGeometry`], which is recomputed on every call by running the
//! modifier pipeline (normalize, flip, multiply) over the world-space points.
//!
//! ## Example
//!
//! ```rust
//! use align_geom::{GeometricPrimitive, Modifiers, Vec3};
//!
//! let line = GeometricPrimitive::line(Vec3::ZERO, Vec3::new(0.0, 3.0, 0.0))
//!     .with_modifiers(Modifiers::new(true, false, 2.0));
//! let (start, end) = line.effective().as_line().unwrap();
//! assert_eq!(start, Vec3::ZERO);
//! assert_eq!(end, Vec3::new(0.0, 2.0, 0.0));
//! ```
//!
//! ## Conventions
//!
//! - Matrices are glam column-major `DMat4`; `compose(a, b) = a * b` applies `b` first.
//! - Plane pivots default to point B; `pivot_is_a` makes A the pivot.
//! - Plane normals are `(other - pivot) × (c - pivot)`.

pub mod core;
pub mod derive;
pub mod error;
pub mod modifiers;
pub mod primitive;
pub mod slots;

pub use crate::core::mat4::{Mat3, Mat4};
pub use crate::core::rotation::Quat;
pub use crate::core::vec3::Vec3;
pub use derive::{line_vector, plane_basis, PlaneBasis};
pub use error::{GeomError, GeomResult};
pub use modifiers::Modifiers;
pub use primitive::{EffectiveGeometry, GeometricPrimitive, PrimitiveKind};
pub use slots::{Attribute, AttributeValue, Slot};
