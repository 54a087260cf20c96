//! # Shapes
//!
//! Builders for the procedural sprite shapes. Each builder is a free function
//! taking plain parameters and returning a fresh [`ShapeMesh`]; builders share
//! nothing but the result types and the geometry helpers.

pub mod ellipse;
pub mod pointed_circle;
pub mod quadrangle;

pub use ellipse::{build_ellipse, EllipseParams};
pub use pointed_circle::{build_pointed_circle, PointedCircleParams};
pub use quadrangle::{build_quadrangle, QuadrangleInput, QuadrangleLayout};

use crate::collider::ColliderShape;
use crate::error::{ShapeResult, ValidationError};
use crate::mesh::MeshData;
use config::constants::MIN_SIDES;
use serde::{Deserialize, Serialize};

/// Output of a shape build: render mesh plus collider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeMesh {
    /// Render geometry
    pub mesh: MeshData,
    /// Collision geometry
    pub collider: ColliderShape,
}

/// Parameters for any supported shape.
///
/// Useful when shapes are stored or built in bulk; see
/// [`crate::batch::build_all`].
///
/// # Example
///
/// ```rust
/// use sprite_mesh::{EllipseParams, ShapeParams};
///
/// let params = ShapeParams::Ellipse(EllipseParams::circle(1.0, 16));
/// assert_eq!(params.name(), "Ellipse");
/// assert_eq!(params.build().unwrap().mesh.triangle_count(), 16);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ShapeParams {
    /// Four-point shape
    Quadrangle(QuadrangleInput),
    /// Ellipse or circle
    Ellipse(EllipseParams),
    /// Circle with a shifted apex
    PointedCircle(PointedCircleParams),
}

impl ShapeParams {
    /// Display name of the shape kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Quadrangle(_) => "Quadrangle",
            Self::Ellipse(_) => "Ellipse",
            Self::PointedCircle(_) => "PointedCircle",
        }
    }

    /// Builds the shape.
    pub fn build(&self) -> ShapeResult<ShapeMesh> {
        match self {
            Self::Quadrangle(input) => Ok(input.build()),
            Self::Ellipse(params) => params.build(),
            Self::PointedCircle(params) => params.build(),
        }
    }
}

impl From<QuadrangleInput> for ShapeParams {
    fn from(input: QuadrangleInput) -> Self {
        Self::Quadrangle(input)
    }
}

impl From<EllipseParams> for ShapeParams {
    fn from(params: EllipseParams) -> Self {
        Self::Ellipse(params)
    }
}

impl From<PointedCircleParams> for ShapeParams {
    fn from(params: PointedCircleParams) -> Self {
        Self::PointedCircle(params)
    }
}

// =============================================================================
// SHARED VALIDATION
// =============================================================================

/// Rejects side counts too small to form a fan.
pub(crate) fn check_sides(shape: &str, sides: u32) -> ShapeResult<()> {
    if sides < MIN_SIDES {
        log::warn!("{shape}: sides count can't be less than two (got {sides})");
        return Err(ValidationError::SidesTooFew { sides });
    }
    Ok(())
}

/// Rejects a zero radius and returns its absolute value otherwise.
pub(crate) fn normalize_radius(shape: &str, radius: f64) -> ShapeResult<f64> {
    if radius == 0.0 {
        log::warn!("{shape}: radius can't be equal to zero");
        return Err(ValidationError::ZeroRadius);
    }
    Ok(radius.abs())
}
