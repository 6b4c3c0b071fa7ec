//! # Config Crate
//!
//! Centralized configuration constants for the alignment engine.
//! All tolerances, default modifier values and the angle unit used for
//! reporting are defined here so the geometry and solver crates agree on
//! the same numbers.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EngineConfig, DEFAULT_MULTIPLIER, EPSILON};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 1e-12;
//! assert!(value.abs() < EPSILON);
//!
//! // Modifiers default to an identity multiplier
//! assert_eq!(DEFAULT_MULTIPLIER, 1.0);
//!
//! // Solvers receive a validated engine configuration
//! let cfg = EngineConfig::default();
//! assert_eq!(cfg.tolerance, EPSILON);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Host Agnostic**: No values tied to a particular modeling host
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
