//! # Ellipse
//!
//! Fan-triangulated ellipse; a circle when both radii are equal.
//!
//! Rim vertex `i` (1-based) sits at angle `(i + 1) * delta` where
//! `delta = FULL_TURN / sides`, so the first rim vertex is one step past the
//! positive X axis. The collider outline uses the same parametrization.


use super::{check_sides, normalize_radius, ShapeMesh};
use crate::collider::ColliderShape;
use crate::error::ShapeResult;
use crate::mesh::MeshData;
use config::constants::{ShapeDefaults, FULL_TURN, UV_CENTER};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

const SHAPE: &str = "Ellipse";

/// Ellipse parameters as supplied by the caller.
///
/// Radii keep their sign here; the builder normalizes them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipseParams {
    /// Radius along X
    pub radius_horizontal: f64,
    /// Radius along Y
    pub radius_vertical: f64,
    /// Number of rim vertices
    pub sides: u32,
}

impl EllipseParams {
    /// Creates ellipse parameters.
    pub fn new(radius_horizontal: f64, radius_vertical: f64, sides: u32) -> Self {
        Self {
            radius_horizontal,
            radius_vertical,
            sides,
        }
    }

    /// Creates parameters for a circle.
    pub fn circle(radius: f64, sides: u32) -> Self {
        Self::new(radius, radius, sides)
    }

    /// Returns true if both radii have the same magnitude.
    pub fn is_circle(&self) -> bool {
        self.radius_horizontal.abs() == self.radius_vertical.abs()
    }

    /// Builds the ellipse.
    pub fn build(&self) -> ShapeResult<ShapeMesh> {
        build_ellipse(self.radius_horizontal, self.radius_vertical, self.sides)
    }
}

impl Default for EllipseParams {
    fn default() -> Self {
        let defaults = ShapeDefaults::default();
        Self::circle(defaults.radius, defaults.sides)
    }
}

/// Position of rim point `i` for the given (already positive) radii.
fn rim_point(i: u32, angle_delta: f64, radius_horizontal: f64, radius_vertical: f64) -> DVec2 {
    let angle = f64::from(i + 1) * angle_delta;
    DVec2::new(angle.cos() * radius_horizontal, angle.sin() * radius_vertical)
}

/// Builds an ellipse fan and its outline collider.
///
/// # Errors
///
/// - [`ValidationError::SidesTooFew`](crate::ValidationError::SidesTooFew) if `sides < 2`
/// - [`ValidationError::ZeroRadius`](crate::ValidationError::ZeroRadius) if either radius is zero
///
/// Negative radii are used by magnitude.
///
/// # Example
///
/// ```rust
/// use sprite_mesh::build_ellipse;
///
/// let shape = build_ellipse(2.0, 2.0, 4).unwrap();
/// assert_eq!(shape.mesh.vertex_count(), 5);
/// assert_eq!(shape.mesh.triangle_count(), 4);
/// assert_eq!(shape.collider.outline().map(|p| p.len()), Some(5));
/// ```
pub fn build_ellipse(
    radius_horizontal: f64,
    radius_vertical: f64,
    sides: u32,
) -> ShapeResult<ShapeMesh> {
    check_sides(SHAPE, sides)?;
    let radius_horizontal = normalize_radius(SHAPE, radius_horizontal)?;
    let radius_vertical = normalize_radius(SHAPE, radius_vertical)?;

    let count = sides as usize;
    let angle_delta = FULL_TURN / f64::from(sides);

    let mut vertices = Vec::with_capacity(count + 1);
    let mut uvs = Vec::with_capacity(count + 1);
    let mut triangles = Vec::with_capacity(count);

    vertices.push(DVec3::ZERO);
    uvs.push(DVec2::splat(UV_CENTER));

    for i in 1..=sides {
        let p = rim_point(i, angle_delta, radius_horizontal, radius_vertical);
        vertices.push(p.extend(0.0));
        uvs.push(DVec2::new(
            p.x / 2.0 / radius_horizontal + UV_CENTER,
            p.y / 2.0 / radius_vertical + UV_CENTER,
        ));
        triangles.push([1 + i % sides, 1 + (i - 1) % sides, 0]);
    }

    let outline = (0..=sides)
        .map(|i| rim_point(i, angle_delta, radius_horizontal, radius_vertical))
        .collect();

    let mesh = MeshData::from_parts(vertices, triangles, uvs);
    log::debug!(
        "{SHAPE}: built {} vertices, {} triangles ({}x{}, {} sides)",
        mesh.vertex_count(),
        mesh.triangle_count(),
        radius_horizontal,
        radius_vertical,
        sides
    );

    Ok(ShapeMesh {
        mesh,
        collider: ColliderShape::polygon(outline),
    })
}
