//! # Geometry Helpers
//!
//! Orientation predicates, UV unwrapping and normal generation shared by all
//! shape builders. Every function here is pure.


use config::constants::{FLAT_NORMAL, UV_CENTER};
use glam::{DVec2, DVec3};

// =============================================================================
// ORIENTATION
// =============================================================================

/// Signed, doubled area of triangle `(p, a, b)`.
///
/// The sign tells which half-plane of the directed line `a → b` contains `p`;
/// zero means `p` is on the line. Multiplying two results for the same line
/// gives a same-side test: `side(p1, a, b) * side(p2, a, b) <= 0` holds when
/// `p1` and `p2` are on opposite sides (or one touches the line).
///
/// # Example
///
/// ```rust
/// use sprite_mesh::geometry::side;
/// use glam::DVec2;
///
/// let a = DVec2::ZERO;
/// let b = DVec2::X;
/// assert!(side(DVec2::new(0.5, 1.0), a, b) > 0.0);
/// assert!(side(DVec2::new(0.5, -1.0), a, b) < 0.0);
/// assert_eq!(side(DVec2::new(3.0, 0.0), a, b), 0.0);
/// ```
#[inline]
pub fn side(p: DVec2, a: DVec2, b: DVec2) -> f64 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

/// Returns true if `v` lies inside or on the boundary of triangle
/// `(v1, v2, v3)`, for either winding order.
///
/// # Example
///
/// ```rust
/// use sprite_mesh::geometry::point_in_triangle;
/// use glam::DVec2;
///
/// let (a, b, c) = (DVec2::ZERO, DVec2::new(2.0, 0.0), DVec2::new(0.0, 2.0));
/// assert!(point_in_triangle(DVec2::new(0.5, 0.5), a, b, c));
/// assert!(point_in_triangle(DVec2::new(1.0, 1.0), a, b, c)); // on the hypotenuse
/// assert!(!point_in_triangle(DVec2::new(2.0, 2.0), a, b, c));
/// ```
pub fn point_in_triangle(v: DVec2, v1: DVec2, v2: DVec2, v3: DVec2) -> bool {
    let a1 = side(v, v1, v2);
    let a2 = side(v, v2, v3);
    let a3 = side(v, v3, v1);
    (a1 >= 0.0 && a2 >= 0.0 && a3 >= 0.0) || (a1 <= 0.0 && a2 <= 0.0 && a3 <= 0.0)
}

// =============================================================================
// AREA
// =============================================================================

/// Unsigned area of triangle `(a, b, c)`.
#[inline]
pub fn triangle_area(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    side(a, b, c).abs() * 0.5
}

/// Signed shoelace area of a closed polygon.
///
/// Positive for counter-clockwise winding, negative for clockwise. The closing
/// edge from the last point back to the first is implied.
///
/// # Example
///
/// ```rust
/// use sprite_mesh::geometry::polygon_area;
/// use glam::DVec2;
///
/// let square = [DVec2::ZERO, DVec2::X, DVec2::ONE, DVec2::Y];
/// assert_eq!(polygon_area(&square), 1.0);
/// ```
pub fn polygon_area(points: &[DVec2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }

    let twice_area: f64 = (0..n)
        .map(|i| {
            let curr = points[i];
            let next = points[(i + 1) % n];
            curr.x * next.y - next.x * curr.y
        })
        .sum();

    twice_area * 0.5
}

// =============================================================================
// ATTRIBUTES
// =============================================================================

/// Maps each vertex into normalized UV space using the bounding box of all
/// vertices.
///
/// An axis with zero extent maps every vertex to `0.5` on that axis, centering
/// the texture instead of dividing by zero. The Z coordinate is ignored.
///
/// # Example
///
/// ```rust
/// use sprite_mesh::geometry::uv_unwrap;
/// use glam::{DVec2, DVec3};
///
/// let uvs = uv_unwrap(&[DVec3::new(-2.0, 1.0, 0.0), DVec3::new(2.0, 3.0, 0.0)]);
/// assert_eq!(uvs, vec![DVec2::new(0.0, 0.0), DVec2::new(1.0, 1.0)]);
/// ```
pub fn uv_unwrap(vertices: &[DVec3]) -> Vec<DVec2> {
    let Some(first) = vertices.first() else {
        return Vec::new();
    };

    let mut min = first.truncate();
    let mut max = min;
    for v in &vertices[1..] {
        min = min.min(v.truncate());
        max = max.max(v.truncate());
    }

    let extent = max - min;
    let normalize = |value: f64, lo: f64, span: f64| {
        if span == 0.0 {
            UV_CENTER
        } else {
            (value - lo) / span
        }
    };

    vertices
        .iter()
        .map(|v| {
            DVec2::new(
                normalize(v.x, min.x, extent.x),
                normalize(v.y, min.y, extent.y),
            )
        })
        .collect()
}

/// Returns `count` flat normals facing the camera.
///
/// # Example
///
/// ```rust
/// use sprite_mesh::geometry::generate_normals;
/// use glam::DVec3;
///
/// assert_eq!(generate_normals(2), vec![DVec3::NEG_Z, DVec3::NEG_Z]);
/// ```
pub fn generate_normals(count: usize) -> Vec<DVec3> {
    vec![DVec3::from_array(FLAT_NORMAL); count]
}
