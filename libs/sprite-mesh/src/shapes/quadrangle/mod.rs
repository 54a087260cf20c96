//! # Quadrangle
//!
//! Two-triangle mesh for four arbitrary points.
//!
//! ## Algorithm
//!
//! The input order is not trusted to describe a simple outline: the points
//! may be concave, or ordered so that `v0 v1 v2 v3` crosses itself. The
//! builder first asks whether `v3` falls inside triangle `(v0, v1, v2)`, then
//! runs a fixed-priority sequence of side tests to pick the diagonal that
//! lies inside the quadrangle. The same decision yields the collider order,
//! which walks the actual outline.
//!
//! | Layout              | `v3` in `(v0,v1,v2)` | Triangles           | Collider order   |
//! |---------------------|----------------------|---------------------|------------------|
//! | `CrossesFirstEdge`  | no                   | `(0,1,2)` `(3,1,0)` | `v0 v3 v1 v2`    |
//! | `CrossesSecondEdge` | no                   | `(0,1,2)` `(1,2,3)` | `v0 v1 v3 v2`    |
//! | `Convex`            | no                   | `(0,1,2)` `(0,2,3)` | `v0 v1 v2 v3`    |
//! | `NestedFirst`       | yes                  | `(1,2,3)` `(0,1,3)` | `v0 v1 v2 v3`    |
//! | `NestedSecond`      | yes                  | `(1,2,3)` `(0,1,2)` | `v0 v1 v3 v2`    |
//! | `NestedFallback`    | yes                  | `(1,2,3)` `(0,2,3)` | `v0 v3 v1 v2`    |
//!
//! Degenerate input (collinear or coincident points) is not rejected; it
//! produces zero-area triangles.


use super::ShapeMesh;
use crate::collider::ColliderShape;
use crate::geometry::{point_in_triangle, side, uv_unwrap};
use crate::mesh::MeshData;
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Four points, in the order the caller supplied them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadrangleInput {
    /// Corner points `v0..v3`
    pub points: [DVec2; 4],
}

impl QuadrangleInput {
    /// Creates an input from four points.
    pub fn new(v0: DVec2, v1: DVec2, v2: DVec2, v3: DVec2) -> Self {
        Self {
            points: [v0, v1, v2, v3],
        }
    }

    /// Builds the quadrangle. Never fails.
    pub fn build(&self) -> ShapeMesh {
        build_quadrangle(self)
    }

    /// Classifies the input without building geometry.
    pub fn layout(&self) -> QuadrangleLayout {
        QuadrangleLayout::classify(&self.points)
    }
}

impl From<[DVec2; 4]> for QuadrangleInput {
    fn from(points: [DVec2; 4]) -> Self {
        Self { points }
    }
}

/// Which diagonal configuration the input falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuadrangleLayout {
    /// `v3` lies across edge `v0 v1` from `v2`.
    CrossesFirstEdge,
    /// `v3` lies across edge `v1 v2` from `v0`.
    CrossesSecondEdge,
    /// Input order already traces a convex outline.
    Convex,
    /// `v3` inside `(v0, v1, v2)`, nested against edge `v1 v3`.
    NestedFirst,
    /// `v3` inside `(v0, v1, v2)`, nested against edge `v1 v2`.
    NestedSecond,
    /// `v3` inside `(v0, v1, v2)`, no earlier test matched.
    NestedFallback,
}

impl QuadrangleLayout {
    /// Runs the priority-ordered side tests on `v0..v3`.
    pub fn classify(points: &[DVec2; 4]) -> Self {
        let [v0, v1, v2, v3] = *points;

        if !point_in_triangle(v3, v0, v1, v2) {
            if side(v3, v0, v1) * side(v2, v0, v1) <= 0.0 {
                Self::CrossesFirstEdge
            } else if side(v3, v1, v2) * side(v0, v1, v2) <= 0.0 {
                Self::CrossesSecondEdge
            } else {
                Self::Convex
            }
        } else if side(v0, v3, v1) <= 0.0 && side(v2, v3, v1) >= 0.0 {
            Self::NestedFirst
        } else if side(v0, v1, v2) <= 0.0 && side(v3, v1, v2) >= 0.0 {
            Self::NestedSecond
        } else {
            Self::NestedFallback
        }
    }

    /// The two triangles, as indices into the input points.
    pub fn triangles(self) -> [[u32; 3]; 2] {
        match self {
            Self::CrossesFirstEdge => [[0, 1, 2], [3, 1, 0]],
            Self::CrossesSecondEdge => [[0, 1, 2], [1, 2, 3]],
            Self::Convex => [[0, 1, 2], [0, 2, 3]],
            Self::NestedFirst => [[1, 2, 3], [0, 1, 3]],
            Self::NestedSecond => [[1, 2, 3], [0, 1, 2]],
            Self::NestedFallback => [[1, 2, 3], [0, 2, 3]],
        }
    }

    /// Input indices in outline traversal order.
    pub fn outline_order(self) -> [usize; 4] {
        match self {
            Self::Convex | Self::NestedFirst => [0, 1, 2, 3],
            Self::CrossesFirstEdge | Self::NestedFallback => [0, 3, 1, 2],
            Self::CrossesSecondEdge | Self::NestedSecond => [0, 1, 3, 2],
        }
    }
}

/// Builds a two-triangle mesh and an outline collider from four points.
///
/// UVs are unwrapped over the points in input order; the collider reordering
/// does not affect them.
///
/// # Example
///
/// ```rust
/// use sprite_mesh::{build_quadrangle, QuadrangleInput};
/// use glam::DVec2;
///
/// let square = QuadrangleInput::new(DVec2::ZERO, DVec2::X, DVec2::ONE, DVec2::Y);
/// let shape = build_quadrangle(&square);
/// assert_eq!(shape.mesh.triangle_count(), 2);
/// assert_eq!(shape.mesh.area(), 1.0);
/// ```
pub fn build_quadrangle(input: &QuadrangleInput) -> ShapeMesh {
    let layout = input.layout();
    log::trace!("Quadrangle: layout {layout:?} for {:?}", input.points);

    let vertices: Vec<DVec3> = input.points.iter().map(|p| p.extend(0.0)).collect();
    let uvs = uv_unwrap(&vertices);
    let triangles = layout.triangles().to_vec();
    let outline = layout
        .outline_order()
        .iter()
        .map(|&i| input.points[i])
        .collect();

    let mesh = MeshData::from_parts(vertices, triangles, uvs);
    log::debug!(
        "Quadrangle: built {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    ShapeMesh {
        mesh,
        collider: ColliderShape::polygon(outline),
    }
}
