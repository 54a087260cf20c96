//! # Collider Shapes
//!
//! Physics-side output of the shape builders. Colliders are derived from the
//! same parameters as the render mesh, never read back from its triangles.

use crate::geometry::polygon_area;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A circle primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center of the circle
    pub center: DVec2,
    /// Radius (always positive once built)
    pub radius: f64,
}

impl Circle {
    /// Creates a circle.
    pub fn new(center: DVec2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Returns true if `point` is inside or on the circle.
    pub fn contains(&self, point: DVec2) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }

    /// Area of the circle.
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

/// Collision geometry produced alongside a mesh.
///
/// Polygons are closed implicitly: the edge from the last point back to the
/// first is part of the outline.
///
/// # Example
///
/// ```rust
/// use sprite_mesh::{build_pointed_circle, ColliderShape};
/// use glam::DVec2;
///
/// let shape = build_pointed_circle(1.0, 8, DVec2::new(3.0, 0.0)).unwrap();
/// match shape.collider {
///     ColliderShape::CircleWithTriangle { circle, triangle } => {
///         assert_eq!(circle.radius, 1.0);
///         assert_eq!(triangle[0], DVec2::new(3.0, 0.0));
///     }
///     other => panic!("expected circle with triangle, got {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColliderShape {
    /// Ordered closed outline.
    Polygon {
        /// Outline points in traversal order
        points: Vec<DVec2>,
    },
    /// A plain circle.
    Circle(Circle),
    /// A circle plus a triangle covering a point that pokes out of it.
    CircleWithTriangle {
        /// The base circle
        circle: Circle,
        /// Triangle outline: the protruding point, then the two tangent-side
        /// points on the circle
        triangle: [DVec2; 3],
    },
}

impl ColliderShape {
    /// Creates a polygon collider.
    pub fn polygon(points: Vec<DVec2>) -> Self {
        Self::Polygon { points }
    }

    /// Returns the polygon outline, if this collider has one.
    ///
    /// For [`ColliderShape::CircleWithTriangle`] this is the triangle.
    pub fn outline(&self) -> Option<&[DVec2]> {
        match self {
            Self::Polygon { points } => Some(points),
            Self::Circle(_) => None,
            Self::CircleWithTriangle { triangle, .. } => Some(triangle),
        }
    }

    /// Returns the circle primitive, if this collider has one.
    pub fn circle(&self) -> Option<Circle> {
        match self {
            Self::Polygon { .. } => None,
            Self::Circle(circle) | Self::CircleWithTriangle { circle, .. } => Some(*circle),
        }
    }

    /// Number of separate physics shapes this collider maps to.
    pub fn part_count(&self) -> usize {
        match self {
            Self::Polygon { .. } | Self::Circle(_) => 1,
            Self::CircleWithTriangle { .. } => 2,
        }
    }

    /// Unsigned area of the polygon outline, if any.
    ///
    /// Self-intersecting outlines report the net shoelace area.
    pub fn outline_area(&self) -> Option<f64> {
        self.outline().map(|points| polygon_area(points).abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_circle_contains() {
        let circle = Circle::new(DVec2::ZERO, 2.0);
        assert!(circle.contains(DVec2::new(2.0, 0.0)));
        assert!(circle.contains(DVec2::new(1.0, 1.0)));
        assert!(!circle.contains(DVec2::new(2.0, 0.1)));
        assert_relative_eq!(circle.area(), 4.0 * PI);
    }

    #[test]
    fn test_polygon_accessors() {
        let square = vec![DVec2::ZERO, DVec2::X, DVec2::ONE, DVec2::Y];
        let collider = ColliderShape::polygon(square.clone());
        assert_eq!(collider.outline(), Some(square.as_slice()));
        assert_eq!(collider.circle(), None);
        assert_eq!(collider.part_count(), 1);
        assert_relative_eq!(collider.outline_area().unwrap_or_default(), 1.0);
    }

    #[test]
    fn test_circle_accessors() {
        let collider = ColliderShape::Circle(Circle::new(DVec2::ZERO, 1.5));
        assert_eq!(collider.outline(), None);
        assert_eq!(collider.circle().map(|c| c.radius), Some(1.5));
        assert_eq!(collider.outline_area(), None);
    }

    #[test]
    fn test_circle_with_triangle_accessors() {
        let collider = ColliderShape::CircleWithTriangle {
            circle: Circle::new(DVec2::ZERO, 1.0),
            triangle: [DVec2::new(3.0, 0.0), DVec2::new(0.0, -1.0), DVec2::new(0.0, 1.0)],
        };
        assert_eq!(collider.part_count(), 2);
        assert_eq!(collider.outline().map(<[DVec2]>::len), Some(3));
        assert_relative_eq!(collider.outline_area().unwrap_or_default(), 3.0);
    }

    #[test]
    fn test_collider_serializes_with_kind_tag() {
        let collider = ColliderShape::Circle(Circle::new(DVec2::new(1.0, 2.0), 3.0));
        let json = serde_json::to_string(&collider).unwrap();
        assert!(json.contains("\"kind\":\"circle\""));
        let back: ColliderShape = serde_json::from_str(&json).unwrap();
        assert_eq!(back, collider);
    }
}
