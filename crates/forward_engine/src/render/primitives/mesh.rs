//! Mesh representation for 3D models
//!
//! CPU-side geometry with a precomputed local bounding box. Vertex upload is
//! the backend's concern; the renderer only reads the vertex count and the
//! bounds used for culling.

use crate::foundation::math::Vec3;
use crate::scene::AABB;

/// Vertex data structure for 3D rendering with position, normal, and texture coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// 3D position in object space
    pub position: Vec3,
    /// Surface normal
    pub normal: Vec3,
    /// Texture coordinates (u, v)
    pub tex_coord: [f32; 2],
}

impl Vertex {
    /// Create a vertex
    pub const fn new(position: Vec3, normal: Vec3, tex_coord: [f32; 2]) -> Self {
        Self { position, normal, tex_coord }
    }
}

/// Triangle-list geometry with object-space bounds
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Name used in logs and draw records
    pub name: String,
    vertices: Vec<Vertex>,
    bounds: AABB,
}

impl Mesh {
    /// Create a mesh from vertices; bounds are computed from the positions
    pub fn new(name: impl Into<String>, vertices: Vec<Vertex>) -> Self {
        let bounds = AABB::from_points(vertices.iter().map(|v| v.position))
            .unwrap_or_else(|| AABB::new(Vec3::zeros(), Vec3::zeros()));
        Self {
            name: name.into(),
            vertices,
            bounds,
        }
    }

    /// Create a mesh from bare positions (zero normals and texture coordinates)
    pub fn from_positions(name: impl Into<String>, positions: Vec<Vec3>) -> Self {
        let vertices = positions
            .into_iter()
            .map(|position| Vertex::new(position, Vec3::zeros(), [0.0, 0.0]))
            .collect();
        Self::new(name, vertices)
    }

    /// Axis-aligned cube centered at the origin, 36 vertices
    pub fn cube(name: impl Into<String>, half_size: f32) -> Self {
        let faces: [(Vec3, Vec3, Vec3); 6] = [
            (Vec3::x(), Vec3::y(), Vec3::z()),
            (-Vec3::x(), Vec3::y(), -Vec3::z()),
            (Vec3::y(), Vec3::z(), Vec3::x()),
            (-Vec3::y(), Vec3::z(), -Vec3::x()),
            (Vec3::z(), Vec3::x(), Vec3::y()),
            (-Vec3::z(), Vec3::x(), -Vec3::y()),
        ];

        let mut vertices = Vec::with_capacity(36);
        for (normal, u, v) in faces {
            let center = normal * half_size;
            let corner = |su: f32, sv: f32, uv: [f32; 2]| {
                Vertex::new(center + u * (su * half_size) + v * (sv * half_size), normal, uv)
            };
            let quad = [
                corner(-1.0, -1.0, [0.0, 0.0]),
                corner(1.0, -1.0, [1.0, 0.0]),
                corner(1.0, 1.0, [1.0, 1.0]),
                corner(-1.0, 1.0, [0.0, 1.0]),
            ];
            vertices.extend_from_slice(&[quad[0], quad[1], quad[2], quad[0], quad[2], quad[3]]);
        }
        Self::new(name, vertices)
    }

    /// Quad in the XY plane facing +Z, 6 vertices
    pub fn quad(name: impl Into<String>, width: f32, height: f32) -> Self {
        let (hw, hh) = (width * 0.5, height * 0.5);
        let corner = |x: f32, y: f32, uv: [f32; 2]| Vertex::new(Vec3::new(x, y, 0.0), Vec3::z(), uv);
        let quad = [
            corner(-hw, -hh, [0.0, 0.0]),
            corner(hw, -hh, [1.0, 0.0]),
            corner(hw, hh, [1.0, 1.0]),
            corner(-hw, hh, [0.0, 1.0]),
        ];
        Self::new(name, vec![quad[0], quad[1], quad[2], quad[0], quad[2], quad[3]])
    }

    /// Vertex data
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Whether there is anything to draw
    pub fn has_vertices(&self) -> bool {
        !self.vertices.is_empty()
    }

    /// Object-space bounding box
    pub const fn bounds(&self) -> &AABB {
        &self.bounds
    }
}
