//! Subdivided box built on the ring lattice
//!
//! Vertices along the edges and corners are shared between the faces that meet
//! there, so the mesh is closed and welded. This is also what lets the rounded
//! cube reuse the topology unchanged.

use cgmath::{InnerSpace, Vector3};

use crate::error::Result;
use crate::gfx::geometry::lattice::{LatticePoint, RingLattice};
use crate::gfx::geometry::params::{require_positive, require_segments};
use crate::gfx::geometry::{checked_vertex_count, GeometryData};

/// Box dimensions and subdivisions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeParams {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub width_segments: u32,
    pub height_segments: u32,
    pub depth_segments: u32,
}

impl Default for CubeParams {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 100.0,
            depth: 100.0,
            width_segments: 1,
            height_segments: 1,
            depth_segments: 1,
        }
    }
}

impl CubeParams {
    /// A box with one segment per axis
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
            ..Default::default()
        }
    }

    pub fn with_segments(mut self, width: u32, height: u32, depth: u32) -> Self {
        self.width_segments = width;
        self.height_segments = height;
        self.depth_segments = depth;
        self
    }

    pub fn validate(&self) -> Result<()> {
        require_positive("width", self.width)?;
        require_positive("height", self.height)?;
        require_positive("depth", self.depth)?;
        require_segments("width_segments", self.width_segments, 1)?;
        require_segments("height_segments", self.height_segments, 1)?;
        require_segments("depth_segments", self.depth_segments, 1)?;
        Ok(())
    }

    /// Half of each dimension
    pub fn half_extents(&self) -> Vector3<f32> {
        Vector3::new(self.width, self.height, self.depth) * 0.5
    }

    pub(crate) fn lattice(&self) -> RingLattice {
        RingLattice::new(self.width_segments, self.height_segments, self.depth_segments)
    }

    /// World position of a lattice point; lattice `z = 0` is the front (+Z)
    fn position(&self, p: LatticePoint) -> [f32; 3] {
        let half = self.half_extents();
        [
            self.width * p.x as f32 / self.width_segments as f32 - half.x,
            self.height * p.y as f32 / self.height_segments as f32 - half.y,
            half.z - self.depth * p.z as f32 / self.depth_segments as f32,
        ]
    }

    /// Sum of the normals of every face the point lies on, normalized
    fn normal(&self, p: LatticePoint) -> [f32; 3] {
        let side = |i: u32, max: u32| {
            if i == 0 {
                -1.0
            } else if i == max {
                1.0
            } else {
                0.0
            }
        };
        let n = Vector3::new(
            side(p.x, self.width_segments),
            side(p.y, self.height_segments),
            -side(p.z, self.depth_segments),
        );
        n.normalize().into()
    }
}

/// Generate a box centred at the origin
///
/// Faces get axis-aligned normals. Seam vertices, which belong to two or three
/// faces, get the normalized sum of those face normals.
pub fn generate_cube(params: &CubeParams) -> Result<GeometryData> {
    params.validate()?;

    let lattice = params.lattice();
    let vertex_count = checked_vertex_count(lattice.vertex_count())?;
    let mut data =
        GeometryData::with_capacity(vertex_count, lattice.triangle_count() as usize * 3, false);

    for point in lattice.points() {
        data.push_vertex(params.position(point), params.normal(point));
    }
    data.indices = lattice.indices();

    log::debug!(
        "generated cube {}x{}x{}: {} vertices, {} triangles",
        params.width_segments,
        params.height_segments,
        params.depth_segments,
        data.vertex_count(),
        data.triangle_count()
    );

    Ok(data)
}
