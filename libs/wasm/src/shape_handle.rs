//! # Shape Handle
//!
//! WASM-friendly wrapper for a built shape that can be transferred to
//! JavaScript.

use sprite_mesh::{ColliderShape, ShapeMesh};
use wasm_bindgen::prelude::*;

/// A handle to shape data that can be accessed from JavaScript.
///
/// Buffers are flattened to `f32`/`u32` for direct upload to the GPU.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const shape = build_ellipse(1.0, 0.5, 32);
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(shape.vertices(), 3));
/// geometry.setAttribute('uv', new THREE.BufferAttribute(shape.uvs(), 2));
/// geometry.setAttribute('normal', new THREE.BufferAttribute(shape.normals(), 3));
/// geometry.setIndex(new THREE.BufferAttribute(shape.indices(), 1));
///
/// const collider = JSON.parse(shape.collider_json());
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct ShapeHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    vertices: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, i0, i1, i2, ...]
    indices: Vec<u32>,
    /// Texture coordinates as [u, v, u, v, ...]
    uvs: Vec<f32>,
    /// Vertex normals as [nx, ny, nz, ...]
    normals: Vec<f32>,
    collider: ColliderShape,
    vertex_count: u32,
    triangle_count: u32,
}

#[wasm_bindgen]
impl ShapeHandle {
    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.triangle_count
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Length: vertex_count * 3
    pub fn vertices(&self) -> Vec<f32> {
        self.vertices.clone()
    }

    /// Returns the triangle indices as a Uint32Array.
    ///
    /// Length: triangle_count * 3
    pub fn indices(&self) -> Vec<u32> {
        self.indices.clone()
    }

    /// Returns the texture coordinates as a Float32Array.
    ///
    /// Length: vertex_count * 2
    pub fn uvs(&self) -> Vec<f32> {
        self.uvs.clone()
    }

    /// Returns the vertex normals as a Float32Array.
    ///
    /// Length: vertex_count * 3
    pub fn normals(&self) -> Vec<f32> {
        self.normals.clone()
    }

    /// Returns the collider serialized as JSON, tagged by `kind`.
    ///
    /// # Errors
    /// Returns a JavaScript error if serialization fails.
    pub fn collider_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.collider).map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// Returns true if the shape has no geometry.
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }
}

impl ShapeHandle {
    /// Creates a handle from a built shape.
    pub fn from_shape(shape: ShapeMesh) -> Self {
        let ShapeMesh { mesh, collider } = shape;
        let vertex_count = u32::try_from(mesh.vertex_count()).unwrap_or(u32::MAX);
        let triangle_count = u32::try_from(mesh.triangle_count()).unwrap_or(u32::MAX);

        Self {
            vertices: mesh.vertices_f32(),
            indices: mesh.indices_u32(),
            uvs: mesh.uvs_f32(),
            normals: mesh.normals_f32(),
            collider,
            vertex_count,
            triangle_count,
        }
    }

    /// Returns the collider as a Rust value.
    pub fn collider(&self) -> &ColliderShape {
        &self.collider
    }
}
