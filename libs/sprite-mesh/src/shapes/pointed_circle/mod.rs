//! # Pointed Circle
//!
//! A circle fan whose anchor vertex is moved off-center by `shift`, pulling
//! the shape into a point.
//!
//! The collider is always a circle. When the apex is far enough out, a
//! triangle joins it, spanning from the apex to the two circle points at
//! right angles to the shift direction. "Far enough" compares the radius
//! against the *squared* shift length: `radius < |shift|²`.

#[cfg(test)]
mod tests;

use super::{check_sides, normalize_radius, ShapeMesh};
use crate::collider::{Circle, ColliderShape};
use crate::error::ShapeResult;
use crate::geometry::uv_unwrap;
use crate::mesh::MeshData;
use config::constants::{ShapeDefaults, FULL_TURN, QUARTER_TURN};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

const SHAPE: &str = "PointedCircle";

/// Pointed circle parameters as supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointedCircleParams {
    /// Circle radius (sign is dropped by the builder)
    pub radius: f64,
    /// Number of rim vertices
    pub sides: u32,
    /// Apex offset from the circle center
    pub shift: DVec2,
}

impl PointedCircleParams {
    /// Creates pointed circle parameters.
    pub fn new(radius: f64, sides: u32, shift: DVec2) -> Self {
        Self {
            radius,
            sides,
            shift,
        }
    }

    /// Returns true if the collider gains a triangle for these parameters.
    pub fn is_pointed(&self) -> bool {
        apex_protrudes(self.radius.abs(), self.shift)
    }

    /// Builds the pointed circle.
    pub fn build(&self) -> ShapeResult<ShapeMesh> {
        build_pointed_circle(self.radius, self.sides, self.shift)
    }
}

impl Default for PointedCircleParams {
    fn default() -> Self {
        let defaults = ShapeDefaults::default();
        Self::new(defaults.radius, defaults.sides, DVec2::ZERO)
    }
}

fn apex_protrudes(radius: f64, shift: DVec2) -> bool {
    radius < shift.length_squared()
}

/// Collider for a validated (positive) radius.
fn build_collider(radius: f64, shift: DVec2) -> ColliderShape {
    let circle = Circle::new(DVec2::ZERO, radius);
    if !apex_protrudes(radius, shift) {
        return ColliderShape::Circle(circle);
    }

    let apex_angle = shift.y.atan2(shift.x);
    let on_circle = |angle: f64| DVec2::new(angle.cos(), angle.sin()) * radius;

    ColliderShape::CircleWithTriangle {
        circle,
        triangle: [
            shift,
            on_circle(apex_angle - QUARTER_TURN),
            on_circle(apex_angle + QUARTER_TURN),
        ],
    }
}

/// Builds a pointed circle fan and its collider.
///
/// Rim vertex `i` (1-based) sits at angle `i * FULL_TURN / sides`. UVs are
/// unwrapped over the bounding box of apex and rim together.
///
/// # Errors
///
/// - [`ValidationError::SidesTooFew`](crate::ValidationError::SidesTooFew) if `sides < 2`
/// - [`ValidationError::ZeroRadius`](crate::ValidationError::ZeroRadius) if `radius == 0`
///
/// # Example
///
/// ```rust
/// use sprite_mesh::{build_pointed_circle, ColliderShape};
/// use glam::DVec2;
///
/// let shape = build_pointed_circle(1.0, 8, DVec2::ZERO).unwrap();
/// assert_eq!(shape.mesh.triangle_count(), 8);
/// assert!(matches!(shape.collider, ColliderShape::Circle(_)));
/// ```
pub fn build_pointed_circle(radius: f64, sides: u32, shift: DVec2) -> ShapeResult<ShapeMesh> {
    check_sides(SHAPE, sides)?;
    let radius = normalize_radius(SHAPE, radius)?;

    let count = sides as usize;
    let angle_delta = FULL_TURN / f64::from(sides);

    let mut vertices = Vec::with_capacity(count + 1);
    let mut triangles = Vec::with_capacity(count);

    vertices.push(shift.extend(0.0));
    for i in 1..=sides {
        let angle = f64::from(i) * angle_delta;
        vertices.push(DVec3::new(angle.cos(), angle.sin(), 0.0) * radius);
        triangles.push([1 + i % sides, 1 + (i - 1) % sides, 0]);
    }
    let uvs = uv_unwrap(&vertices);

    let mesh = MeshData::from_parts(vertices, triangles, uvs);
    let collider = build_collider(radius, shift);
    log::debug!(
        "{SHAPE}: built {} vertices, {} triangles, {} collider part(s)",
        mesh.vertex_count(),
        mesh.triangle_count(),
        collider.part_count()
    );

    Ok(ShapeMesh { mesh, collider })
}
