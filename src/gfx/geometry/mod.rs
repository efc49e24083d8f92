//! # Procedural Geometry Generation
//!
//! This module provides functions to generate common 3D primitive shapes procedurally.
//! Every generator is a pure function from a parameter record to [`GeometryData`].
//!
//! ## Supported Primitives
//!
//! - **Cube**: Ring-topology box with configurable subdivisions per axis
//! - **Rounded Cube**: The cube topology with its corners pushed onto a rounded surface
//! - **Sphere**: UV sphere, optionally partial (phi/theta ranges)
//! - **Cube Sphere**: Cube lattice warped onto a sphere with near-equal-area cells
//! - **Cone**: Flat-shaded cone with a closed base
//! - **Cylinder**: Cylinder or truncated cone with caps
//! - **Plane**: Flat subdivided grid
//!
//! ## Usage
//!
//! ```rust
//! use shape3d::gfx::geometry::{generate_cube, generate_sphere, CubeParams, SphereParams};
//!
//! // A 2x2x2 cube with four subdivisions along its width
//! let cube = generate_cube(&CubeParams::new(2.0, 2.0, 2.0).with_segments(4, 1, 1))?;
//!
//! // A sphere with 32 segments around and 16 from pole to pole
//! let sphere = generate_sphere(&SphereParams::new(1.0).with_segments(32, 16))?;
//!
//! // Pick the narrowest index type that can address every vertex
//! let indices = sphere.index_buffer()?;
//! assert_eq!(indices.len(), sphere.indices.len());
//! # let _ = cube;
//! # Ok::<(), shape3d::Error>(())
//! ```

pub mod index;
pub mod lattice;
pub mod normals;
pub mod params;
pub mod primitives;
pub mod quad;
pub mod wireframe;


pub use index::{IndexBuffer, IndexFormat};
pub use normals::{flat_normals, normal_lines, LineData};
pub use primitives::*;
pub use quad::{set_quad, set_top_quad, QuadWinding};
pub use wireframe::generate_wireframe_indices;

use crate::error::{Error, Result};
use crate::gfx::scene::vertex::Vertex3D;

/// Represents generated geometry data ready for GPU upload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub positions: Vec<[f32; 3]>,
    /// Unit normal vectors (x, y, z), one per vertex
    pub normals: Vec<[f32; 3]>,
    /// Texture coordinates (u, v), present only for shapes that define them
    pub uvs: Option<Vec<[f32; 2]>>,
    /// Triangle indices (counter-clockwise winding seen from outside)
    pub indices: Vec<u32>,
}

impl GeometryData {
    /// Create a new empty geometry data structure
    pub fn new() -> Self {
        Self::default()
    }

    /// Create empty buffers sized for a known vertex and index count
    pub fn with_capacity(vertex_count: usize, index_count: usize, with_uvs: bool) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            uvs: with_uvs.then(|| Vec::with_capacity(vertex_count)),
            indices: Vec::with_capacity(index_count),
        }
    }

    /// Append a vertex and return its index
    pub fn push_vertex(&mut self, position: [f32; 3], normal: [f32; 3]) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.normals.push(normal);
        index
    }

    /// Append a vertex with texture coordinates and return its index
    ///
    /// Starts the uv stream if this geometry had none yet.
    pub fn push_vertex_uv(&mut self, position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> u32 {
        let index = self.push_vertex(position, normal);
        self.uvs.get_or_insert_with(Vec::new).push(uv);
        index
    }

    /// Append one triangle
    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Get the number of vertices in this geometry
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles in this geometry
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Positions as a flat `[x0, y0, z0, x1, ...]` slice
    pub fn positions_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Normals as a flat `[x0, y0, z0, x1, ...]` slice
    pub fn normals_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.normals)
    }

    /// Texture coordinates as a flat `[u0, v0, u1, ...]` slice
    pub fn uvs_flat(&self) -> Option<&[f32]> {
        self.uvs.as_deref().map(bytemuck::cast_slice)
    }

    /// Narrow the indices to the smallest type that addresses every vertex
    pub fn index_buffer(&self) -> Result<IndexBuffer> {
        IndexBuffer::from_indices(&self.indices, self.vertex_count())
    }

    /// Line-list indices for every unique triangle edge
    pub fn wireframe_indices(&self) -> Vec<u32> {
        generate_wireframe_indices(&self.indices)
    }

    /// Convert to the interleaved vertex format used for upload
    ///
    /// Missing uvs are filled with zeros.
    pub fn to_vertices(&self) -> Vec<Vertex3D> {
        (0..self.vertex_count())
            .map(|i| Vertex3D {
                position: self.positions[i],
                normal: self.normals[i],
                tex_coord: self
                    .uvs
                    .as_ref()
                    .and_then(|uvs| uvs.get(i).copied())
                    .unwrap_or([0.0, 0.0]),
            })
            .collect()
    }
}

/// Convert a precomputed vertex count into a buffer capacity
///
/// Fails before anything is allocated when the count cannot be addressed by
/// 32-bit indices.
pub(crate) fn checked_vertex_count(vertex_count: u64) -> Result<usize> {
    let max = u64::from(u32::MAX) + 1;
    if vertex_count > max {
        log::warn!(
            "refusing to generate {} vertices, above the 32-bit index range",
            vertex_count
        );
        return Err(Error::index_overflow(vertex_count, IndexFormat::Uint32));
    }
    usize::try_from(vertex_count).map_err(|_| Error::index_overflow(vertex_count, IndexFormat::Uint32))
}
