//! # Geometry Errors
//!
//! Error types for the kernel, the primitive accessors and the slot utility.

use thiserror::Error;

use crate::primitive::PrimitiveKind;

/// Result alias used throughout the geometry crate.
pub type GeomResult<T> = Result<T, GeomError>;

/// Errors raised by geometry operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    /// Matrix could not be inverted.
    #[error("matrix is singular (determinant {determinant})")]
    SingularMatrix {
        /// Determinant of the rejected matrix.
        determinant: f64,
    },

    /// A primitive of the wrong kind was supplied.
    #[error("expected a {expected} primitive, found a {found}")]
    InvalidOperandKind {
        /// Kind required by the operation.
        expected: PrimitiveKind,
        /// Kind actually supplied.
        found: PrimitiveKind,
    },

    /// Slot or attribute name outside the fixed vocabulary.
    #[error("unknown slot or attribute '{name}'")]
    UnknownSlot {
        /// The rejected name.
        name: String,
    },

    /// Attribute value has the wrong type for the named attribute.
    #[error("attribute '{name}' expects a {expected} value")]
    AttributeType {
        /// Attribute name.
        name: String,
        /// Human readable value type ("coordinate", "flag", "scalar").
        expected: &'static str,
    },

    /// Slot list and value list differ in length.
    #[error("{slots} slot names supplied for {values} values")]
    SlotCountMismatch {
        /// Number of slot names.
        slots: usize,
        /// Number of values.
        values: usize,
    },
}

impl GeomError {
    /// Creates an operand kind error.
    pub fn wrong_kind(expected: PrimitiveKind, found: PrimitiveKind) -> Self {
        Self::InvalidOperandKind { expected, found }
    }

    /// Creates an unknown slot error.
    pub fn unknown_slot(name: impl Into<String>) -> Self {
        Self::UnknownSlot { name: name.into() }
    }
}
