//! Centralized configuration values shared across the sprite mesh pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// ANGLES
// =============================================================================

/// One full revolution in radians. Fan builders divide this by the side count
/// to obtain the angular step between rim vertices.
///
/// # Examples
/// ```
/// use config::constants::FULL_TURN;
/// assert_eq!(FULL_TURN, std::f64::consts::TAU);
/// ```
pub const FULL_TURN: f64 = std::f64::consts::TAU;

/// A quarter revolution in radians.
///
/// # Examples
/// ```
/// use config::constants::{FULL_TURN, QUARTER_TURN};
/// assert_eq!(QUARTER_TURN * 4.0, FULL_TURN);
/// ```
pub const QUARTER_TURN: f64 = std::f64::consts::FRAC_PI_2;

// =============================================================================
// SHAPE LIMITS AND DEFAULTS
// =============================================================================

/// Smallest side count accepted by the fan builders.
///
/// # Examples
/// ```
/// use config::constants::MIN_SIDES;
/// assert_eq!(MIN_SIDES, 2);
/// ```
pub const MIN_SIDES: u32 = 2;

/// Side count used by parameter records when none is supplied.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_SIDES, MIN_SIDES};
/// assert!(DEFAULT_SIDES >= MIN_SIDES);
/// ```
pub const DEFAULT_SIDES: u32 = 32;

/// Radius used by parameter records when none is supplied.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_RADIUS;
/// assert!(DEFAULT_RADIUS > 0.0);
/// ```
pub const DEFAULT_RADIUS: f64 = 1.0;

// =============================================================================
// MESH ATTRIBUTES
// =============================================================================

/// Normal assigned to every sprite vertex: flat, facing the camera which looks
/// down the positive Z axis.
///
/// # Examples
/// ```
/// use config::constants::FLAT_NORMAL;
/// assert_eq!(FLAT_NORMAL, [0.0, 0.0, -1.0]);
/// ```
pub const FLAT_NORMAL: [f64; 3] = [0.0, 0.0, -1.0];

/// Texture coordinate of the UV-space center. Degenerate axes in UV unwrapping
/// collapse onto this value.
///
/// # Examples
/// ```
/// use config::constants::UV_CENTER;
/// assert_eq!(UV_CENTER, 0.5);
/// ```
pub const UV_CENTER: f64 = 0.5;

// =============================================================================
// PRECISION
// =============================================================================

/// Tolerance for approximate floating-point comparisons.
///
/// Geometry decisions in the builders use exact comparisons; this value is for
/// callers that need to compare generated coordinates.
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
/// assert!((0.1_f64 + 0.2 - 0.3).abs() < EPSILON);
/// ```
pub const EPSILON: f64 = 1.0e-9;

// =============================================================================
// SHAPE DEFAULTS
// =============================================================================

/// Immutable snapshot of default shape parameters shared between crates.
///
/// # Examples
/// ```
/// use config::constants::ShapeDefaults;
/// let defaults = ShapeDefaults::default();
/// assert!(defaults.radius > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeDefaults {
    /// Side count for fan shapes.
    pub sides: u32,
    /// Radius for round shapes.
    pub radius: f64,
}

impl ShapeDefaults {
    /// Builds a snapshot enforcing strict validation of the supplied values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ShapeDefaults;
    /// let defaults = ShapeDefaults::new(12, 2.5).expect("valid defaults");
    /// assert_eq!(defaults.sides, 12);
    /// ```
    pub fn new(sides: u32, radius: f64) -> Result<Self, ConfigError> {
        if sides < MIN_SIDES {
            return Err(ConfigError::InvalidSides(sides));
        }
        if !(radius > 0.0) || !radius.is_finite() {
            return Err(ConfigError::InvalidRadius(radius));
        }
        Ok(Self { sides, radius })
    }
}

impl Default for ShapeDefaults {
    fn default() -> Self {
        Self {
            sides: DEFAULT_SIDES,
            radius: DEFAULT_RADIUS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the side count is too small to form a fan.
    InvalidSides(u32),
    /// Raised when the radius is zero, negative or not finite.
    InvalidRadius(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSides(value) => {
                write!(f, "sides must be >= {MIN_SIDES}: {value}")
            }
            ConfigError::InvalidRadius(value) => {
                write!(f, "radius must be positive and finite: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
