//! # Mesh Data
//!
//! Render-side output of every shape builder: positions, triangle indices,
//! texture coordinates and normals.

use crate::geometry::{generate_normals, triangle_area};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// A flat triangle mesh in the XY plane.
///
/// All geometry calculations use f64 internally. Export to f32 only happens
/// at the adapter boundary for GPU upload. A `MeshData` is never patched in
/// place: rebuilding a shape produces a new value.
///
/// # Example
///
/// ```rust
/// use sprite_mesh::build_ellipse;
///
/// let shape = build_ellipse(2.0, 1.0, 8).unwrap();
/// let mesh = &shape.mesh;
/// assert_eq!(mesh.vertex_count(), 9);
/// assert_eq!(mesh.triangle_count(), 8);
/// assert!(mesh.validate());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshData {
    /// Vertex positions (z is always 0)
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
    /// Texture coordinates, one per vertex
    uvs: Vec<DVec2>,
    /// Vertex normals, one per vertex
    normals: Vec<DVec3>,
}

impl MeshData {
    /// Assembles a mesh from builder output, attaching flat normals.
    pub(crate) fn from_parts(
        vertices: Vec<DVec3>,
        triangles: Vec<[u32; 3]>,
        uvs: Vec<DVec2>,
    ) -> Self {
        debug_assert_eq!(uvs.len(), vertices.len());
        let normals = generate_normals(vertices.len());
        Self {
            vertices,
            triangles,
            uvs,
            normals,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the texture coordinates.
    #[inline]
    pub fn uvs(&self) -> &[DVec2] {
        &self.uvs
    }

    /// Returns the vertex normals.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Unsigned area of the triangle at the given index.
    pub fn triangle_area(&self, index: usize) -> f64 {
        let [a, b, c] = self.triangles[index].map(|i| self.vertex(i).truncate());
        triangle_area(a, b, c)
    }

    /// Sum of all triangle areas.
    ///
    /// Equals the covered area only when triangles do not overlap, which the
    /// builders guarantee for simple outlines.
    pub fn area(&self) -> f64 {
        (0..self.triangles.len()).map(|i| self.triangle_area(i)).sum()
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Validates the mesh data contract.
    ///
    /// Checks:
    /// - All triangle indices are in range
    /// - UVs and normals are parallel to vertices
    ///
    /// Zero-area triangles are allowed: degenerate quadrangle input is
    /// triangulated rather than rejected.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len();

        let indices_ok = self
            .triangles
            .iter()
            .flatten()
            .all(|&i| (i as usize) < vertex_count);

        indices_ok && self.uvs.len() == vertex_count && self.normals.len() == vertex_count
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * 3);
        for v in &self.vertices {
            result.push(v.x as f32);
            result.push(v.y as f32);
            result.push(v.z as f32);
        }
        result
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Exports texture coordinates as f32 array.
    ///
    /// Returns flattened [u, v, u, v, ...] array.
    pub fn uvs_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.uvs.len() * 2);
        for uv in &self.uvs {
            result.push(uv.x as f32);
            result.push(uv.y as f32);
        }
        result
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.normals.len() * 3);
        for n in &self.normals {
            result.push(n.x as f32);
            result.push(n.y as f32);
            result.push(n.z as f32);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> MeshData {
        MeshData::from_parts(
            vec![DVec3::ZERO, DVec3::X, DVec3::Y],
            vec![[0, 1, 2]],
            vec![DVec2::ZERO, DVec2::X, DVec2::Y],
        )
    }

    #[test]
    fn test_from_parts_attaches_normals() {
        let mesh = unit_triangle();
        assert_eq!(mesh.normals().len(), 3);
        assert!(mesh.normals().iter().all(|n| *n == DVec3::NEG_Z));
    }

    #[test]
    fn test_mesh_counts() {
        let mesh = unit_triangle();
        assert!(!mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.triangle(0), [0, 1, 2]);
        assert_eq!(mesh.vertex(1), DVec3::X);
    }

    #[test]
    fn test_mesh_area() {
        let mesh = unit_triangle();
        assert_eq!(mesh.triangle_area(0), 0.5);
        assert_eq!(mesh.area(), 0.5);
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mesh = MeshData::from_parts(
            vec![DVec3::new(-1.0, -2.0, 0.0), DVec3::new(4.0, 5.0, 0.0)],
            Vec::new(),
            vec![DVec2::ZERO, DVec2::ONE],
        );
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, 0.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 0.0));
    }

    #[test]
    fn test_mesh_validate_valid() {
        assert!(unit_triangle().validate());
    }

    #[test]
    fn test_mesh_validate_invalid_index() {
        let mesh = MeshData::from_parts(vec![DVec3::ZERO], vec![[0, 1, 2]], vec![DVec2::ZERO]);
        assert!(!mesh.validate());
    }

    #[test]
    fn test_mesh_validate_accepts_zero_area() {
        let mesh = MeshData::from_parts(
            vec![DVec3::ZERO, DVec3::X, DVec3::new(2.0, 0.0, 0.0)],
            vec![[0, 1, 2]],
            vec![DVec2::ZERO; 3],
        );
        assert!(mesh.validate());
        assert_eq!(mesh.area(), 0.0);
    }

    #[test]
    fn test_mesh_flat_exports() {
        let mesh = unit_triangle();
        assert_eq!(mesh.vertices_f32(), vec![0.0f32, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        assert_eq!(mesh.indices_u32(), vec![0, 1, 2]);
        assert_eq!(mesh.uvs_f32(), vec![0.0f32, 0.0, 1.0, 0.0, 0.0, 1.0]);
        assert_eq!(mesh.normals_f32().len(), 9);
        assert_eq!(mesh.indices_u32().len() % 3, 0);
    }
}
