//! # Alignment Errors
//!
//! Every failure is local to a single solve call. Solvers compute the whole
//! result before returning, so an error never leaves a partial edit behind.

use align_geom::GeomError;
use config::constants::ConfigError;
use thiserror::Error;

/// Result type alias for alignment operations.
pub type AlignResult<T> = Result<T, AlignError>;

/// Errors that can occur while solving an alignment.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlignError {
    /// Kernel or primitive error (singular world matrix, wrong operand kind, bad slot).
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeomError),

    /// Scale matching needs two edges of non-zero length.
    #[error("Degenerate edge: source length {source_length}, destination length {destination_length}")]
    DegenerateEdge {
        /// Length of the source edge.
        source_length: f64,
        /// Length of the destination edge.
        destination_length: f64,
    },

    /// The line runs parallel to the plane.
    #[error("Line does not intersect the plane")]
    NoIntersection,

    /// Distribution was requested for zero objects.
    #[error("Nothing to distribute")]
    EmptyDistribution,

    /// Rejected engine configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
