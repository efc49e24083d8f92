//! Subdivided plane in the XY plane facing +Z

use crate::error::Result;
use crate::gfx::geometry::params::{require_positive, require_segments};
use crate::gfx::geometry::{checked_vertex_count, GeometryData};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneParams {
    pub width: f32,
    pub height: f32,
    pub width_segments: u32,
    pub height_segments: u32,
}

impl Default for PlaneParams {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 100.0,
            width_segments: 1,
            height_segments: 1,
        }
    }
}

impl PlaneParams {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_segments(mut self, width_segments: u32, height_segments: u32) -> Self {
        self.width_segments = width_segments;
        self.height_segments = height_segments;
        self
    }

    pub fn validate(&self) -> Result<()> {
        require_positive("width", self.width)?;
        require_positive("height", self.height)?;
        require_segments("width_segments", self.width_segments, 1)?;
        require_segments("height_segments", self.height_segments, 1)?;
        Ok(())
    }
}

/// Generate a plane centred at the origin
pub fn generate_plane(params: &PlaneParams) -> Result<GeometryData> {
    params.validate()?;

    let (w, h) = (params.width_segments, params.height_segments);
    let vertex_count = checked_vertex_count((u64::from(w) + 1) * (u64::from(h) + 1))?;
    let mut data = GeometryData::with_capacity(vertex_count, w as usize * h as usize * 6, true);

    for y in 0..=h {
        let v = y as f32 / h as f32;
        for x in 0..=w {
            let u = x as f32 / w as f32;
            data.push_vertex_uv(
                [(u - 0.5) * params.width, (v - 0.5) * params.height, 0.0],
                [0.0, 0.0, 1.0],
                [u, v],
            );
        }
    }

    for y in 0..h {
        let row = y * (w + 1);
        let next = (y + 1) * (w + 1);
        for x in 0..w {
            data.push_triangle(row + x, row + x + 1, next + x);
            data.push_triangle(row + x + 1, next + x + 1, next + x);
        }
    }

    log::debug!(
        "generated plane {}x{}: {} vertices, {} triangles",
        w,
        h,
        data.vertex_count(),
        data.triangle_count()
    );

    Ok(data)
}

/// Per-vertex barycentric corners for drawing the plane grid in a shader
///
/// Vertex `(x, y)` gets the unit vector selected by `(2y + x) % 3`. With the
/// triangulation of [`generate_plane`] the three corners of every triangle get
/// three different vectors, so a fragment shader can find the triangle edges
/// from the interpolated value.
pub fn barycentric_coords(width_segments: u32, height_segments: u32) -> Vec<[f32; 3]> {
    const CORNERS: [[f32; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

    (0..=height_segments)
        .flat_map(|y| (0..=width_segments).map(move |x| CORNERS[((2 * y + x) % 3) as usize]))
        .collect()
}
