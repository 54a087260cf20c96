//! # Sprite Mesh
//!
//! Procedural 2D sprite geometry: flat triangle meshes with UVs and normals,
//! plus matching collision shapes.
//!
//! ## Architecture
//!
//! ```text
//! parameters → shapes::* builder → ShapeMesh { MeshData, ColliderShape }
//! ```
//!
//! ## Shapes
//!
//! - **Quadrangle**: four free points, split into two non-overlapping triangles
//! - **Ellipse**: center fan; a circle when both radii match
//! - **Pointed circle**: circle fan whose anchor is shifted into a point
//!
//! Every builder is pure: the same parameters always yield the same mesh, and
//! nothing is cached between calls. Batches of shapes build in parallel via
//! [`batch::build_all`].
//!
//! ## Usage
//!
//! ```rust
//! use sprite_mesh::{build_quadrangle, QuadrangleInput};
//! use glam::DVec2;
//!
//! let input = QuadrangleInput::new(
//!     DVec2::new(0.0, 0.0),
//!     DVec2::new(1.0, 0.0),
//!     DVec2::new(1.0, 1.0),
//!     DVec2::new(0.0, 1.0),
//! );
//! let shape = build_quadrangle(&input);
//! assert_eq!(shape.mesh.triangle_count(), 2);
//! assert_eq!(shape.collider.outline().map(|p| p.len()), Some(4));
//! ```

pub mod batch;
pub mod collider;
pub mod error;
pub mod geometry;
pub mod mesh;
pub mod shapes;

pub use batch::build_all;
pub use collider::{Circle, ColliderShape};
pub use error::{ShapeResult, ValidationError};
pub use mesh::MeshData;
pub use shapes::{
    build_ellipse, build_pointed_circle, build_quadrangle, EllipseParams, PointedCircleParams,
    QuadrangleInput, QuadrangleLayout, ShapeMesh, ShapeParams,
};
