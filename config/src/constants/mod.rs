//! Centralized configuration values shared across the alignment crates.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if a length, determinant or dot product is "zero"
/// within numerical tolerance.
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
/// assert!(EPSILON < 1.0e-6);
/// ```
pub const EPSILON: f64 = 1.0e-9;

/// Relative tolerance used to decide that a line runs parallel to a plane.
///
/// The test compares `|n · d|` against `PARALLEL_TOLERANCE * |n| * |d|`, so the
/// value is the sine of the smallest angle still treated as an intersection.
///
/// # Examples
/// ```
/// use config::constants::{EPSILON, PARALLEL_TOLERANCE};
/// assert!(PARALLEL_TOLERANCE >= EPSILON);
/// ```
pub const PARALLEL_TOLERANCE: f64 = 1.0e-6;

// =============================================================================
// MODIFIER DEFAULTS
// =============================================================================

/// Default scalar multiplier applied by point and line modifiers.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_MULTIPLIER;
/// let scaled = 3.0 * DEFAULT_MULTIPLIER;
/// assert_eq!(scaled, 3.0);
/// ```
pub const DEFAULT_MULTIPLIER: f64 = 1.0;

/// Local-space points used by "set origin" mode as the source plane.
///
/// The triangle is `(1,0,0)`, `(0,0,0)`, `(0,1,0)`: the object's X axis tip,
/// its origin (the default pivot) and its Y axis tip.
///
/// # Examples
/// ```
/// use config::constants::SET_ORIGIN_AXIS_POINTS;
/// assert_eq!(SET_ORIGIN_AXIS_POINTS[1], [0.0, 0.0, 0.0]);
/// ```
pub const SET_ORIGIN_AXIS_POINTS: [[f64; 3]; 3] =
    [[1.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]];

// =============================================================================
// ANGLE UNITS
// =============================================================================

/// Angle unit configured by the host for user-facing angle values.
///
/// # Examples
/// ```
/// use config::constants::AngleUnit;
/// let quarter = AngleUnit::Degrees.to_radians(90.0);
/// assert!((quarter - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AngleUnit {
    /// Values are already radians.
    #[default]
    Radians,
    /// Values are degrees.
    Degrees,
}

impl AngleUnit {
    /// Converts a value expressed in this unit into radians.
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            AngleUnit::Radians => value,
            AngleUnit::Degrees => value.to_radians(),
        }
    }

    /// Converts a radian value into this unit.
    pub fn from_radians(self, radians: f64) -> f64 {
        match self {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians.to_degrees(),
        }
    }
}

// =============================================================================
// ENGINE CONFIGURATION
// =============================================================================

/// Immutable snapshot of the settings every solver call receives.
///
/// # Examples
/// ```
/// use config::constants::EngineConfig;
/// let config = EngineConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EngineConfigFields")]
pub struct EngineConfig {
    /// Numeric tolerance for singular matrices and degenerate lengths.
    pub tolerance: f64,
    /// Unit of user-facing angles (axis rotate amounts, reported angles).
    pub angle_unit: AngleUnit,
}

impl EngineConfig {
    /// Builds a configuration enforcing a finite, positive tolerance.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{AngleUnit, EngineConfig};
    /// let cfg = EngineConfig::new(1.0e-6, AngleUnit::Degrees).expect("valid config");
    /// assert_eq!(cfg.angle_unit, AngleUnit::Degrees);
    /// ```
    pub fn new(tolerance: f64, angle_unit: AngleUnit) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        Ok(Self {
            tolerance,
            angle_unit,
        })
    }

    /// Re-checks a configuration built from its public fields.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{AngleUnit, EngineConfig};
    /// let bad = EngineConfig { tolerance: -1.0, angle_unit: AngleUnit::Radians };
    /// assert!(bad.validated().is_err());
    /// assert!(EngineConfig::default().validated().is_ok());
    /// ```
    pub fn validated(self) -> Result<Self, ConfigError> {
        Self::new(self.tolerance, self.angle_unit)
    }

    /// Returns a copy using a different angle unit.
    pub fn with_angle_unit(self, angle_unit: AngleUnit) -> Self {
        Self { angle_unit, ..self }
    }
}

/// Wire form of [`EngineConfig`]; deserialization goes through [`EngineConfig::new`].
#[derive(Deserialize)]
struct EngineConfigFields {
    tolerance: f64,
    #[serde(default)]
    angle_unit: AngleUnit,
}

impl TryFrom<EngineConfigFields> for EngineConfig {
    type Error = ConfigError;

    fn try_from(fields: EngineConfigFields) -> Result<Self, Self::Error> {
        Self::new(fields.tolerance, fields.angle_unit)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON,
            angle_unit: AngleUnit::Radians,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive and finite: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
