//! Flat-shaded cone
//!
//! Vertices are not shared between triangles: every triangle owns its three
//! vertices and carries its own face normal. Welding them would average the
//! normals and smooth the facets away.

use std::f32::consts::PI;

use crate::error::Result;
use crate::gfx::geometry::normals::flat_normals;
use crate::gfx::geometry::params::{require_positive, require_segments, MIN_RADIAL_SEGMENTS};
use crate::gfx::geometry::{checked_vertex_count, GeometryData};

/// Cone base radius, height and number of facets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConeParams {
    pub radius: f32,
    pub height: f32,
    pub radial_segments: u32,
}

impl Default for ConeParams {
    fn default() -> Self {
        Self {
            radius: 50.0,
            height: 100.0,
            radial_segments: MIN_RADIAL_SEGMENTS,
        }
    }
}

impl ConeParams {
    pub fn new(radius: f32, height: f32, radial_segments: u32) -> Self {
        Self {
            radius,
            height,
            radial_segments,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_positive("radius", self.radius)?;
        require_positive("height", self.height)?;
        require_segments("radial_segments", self.radial_segments, MIN_RADIAL_SEGMENTS)?;
        Ok(())
    }
}

/// Generate a cone with its apex at `+height/2` and its base at `-height/2`
///
/// The first `radial_segments` triangles form the side fan, the rest the base.
/// Indices are sequential since no vertex is shared.
pub fn generate_cone(params: &ConeParams) -> Result<GeometryData> {
    params.validate()?;

    let segments = params.radial_segments;
    let vertex_count = checked_vertex_count(u64::from(segments) * 6)?;
    let half_height = params.height * 0.5;

    let ring: Vec<[f32; 3]> = (0..segments)
        .map(|i| {
            let theta = i as f32 / segments as f32 * 2.0 * PI;
            let (sin_theta, cos_theta) = theta.sin_cos();
            [
                params.radius * sin_theta,
                -half_height,
                params.radius * cos_theta,
            ]
        })
        .collect();
    let apex = [0.0, half_height, 0.0];
    let base_center = [0.0, -half_height, 0.0];

    let mut positions = Vec::with_capacity(vertex_count);
    for i in 0..segments as usize {
        let next = (i + 1) % segments as usize;
        positions.extend_from_slice(&[ring[i], ring[next], apex]);
    }
    for i in 0..segments as usize {
        let next = (i + 1) % segments as usize;
        positions.extend_from_slice(&[ring[next], ring[i], base_center]);
    }

    let normals = flat_normals(&positions);
    let data = GeometryData {
        indices: (0..positions.len() as u32).collect(),
        positions,
        normals,
        uvs: None,
    };

    log::debug!(
        "generated cone with {} segments: {} vertices, {} triangles",
        segments,
        data.vertex_count(),
        data.triangle_count()
    );

    Ok(data)
}
