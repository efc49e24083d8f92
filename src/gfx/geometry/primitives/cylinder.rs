//! Cylinder / truncated cone along the Y axis with capped ends

use std::f32::consts::PI;

use cgmath::{InnerSpace, Vector3};

use crate::error::Result;
use crate::gfx::geometry::params::{
    reject, require_non_negative, require_positive, require_segments, MIN_RADIAL_SEGMENTS,
};
use crate::gfx::geometry::{checked_vertex_count, GeometryData};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderParams {
    pub radius_top: f32,
    pub radius_bottom: f32,
    pub height: f32,
    pub radial_segments: u32,
    pub height_segments: u32,
}

impl Default for CylinderParams {
    fn default() -> Self {
        Self {
            radius_top: 50.0,
            radius_bottom: 50.0,
            height: 100.0,
            radial_segments: MIN_RADIAL_SEGMENTS,
            height_segments: 2,
        }
    }
}

impl CylinderParams {
    pub fn new(radius_top: f32, radius_bottom: f32, height: f32) -> Self {
        Self {
            radius_top,
            radius_bottom,
            height,
            ..Default::default()
        }
    }

    pub fn with_segments(mut self, radial_segments: u32, height_segments: u32) -> Self {
        self.radial_segments = radial_segments;
        self.height_segments = height_segments;
        self
    }

    pub fn validate(&self) -> Result<()> {
        require_non_negative("radius_top", self.radius_top)?;
        require_non_negative("radius_bottom", self.radius_bottom)?;
        if self.radius_top == 0.0 && self.radius_bottom == 0.0 {
            return Err(reject(
                "radius_top",
                "radius_top and radius_bottom cannot both be zero".to_string(),
            ));
        }
        require_positive("height", self.height)?;
        require_segments("radial_segments", self.radial_segments, MIN_RADIAL_SEGMENTS)?;
        require_segments("height_segments", self.height_segments, 1)?;
        Ok(())
    }

    /// Radial change per unit of height going down; the Y component of the
    /// unnormalized torso normal
    pub fn slope(&self) -> f32 {
        (self.radius_bottom - self.radius_top) / self.height
    }
}

/// Generate a cylinder centred at the origin
///
/// Layout: the torso grid (rows from top to bottom), then the top cap, then the
/// bottom cap. Each cap has one center vertex per segment so every fan triangle
/// can carry its own uv at the center.
pub fn generate_cylinder(params: &CylinderParams) -> Result<GeometryData> {
    params.validate()?;

    let (radial, rows) = (params.radial_segments, params.height_segments);
    let torso_vertices = (u64::from(radial) + 1) * (u64::from(rows) + 1);
    let cap_vertices = 2 * u64::from(radial) + 1;
    let vertex_count = checked_vertex_count(torso_vertices + 2 * cap_vertices)?;
    let index_count = (radial as usize * rows as usize * 2 + radial as usize * 2) * 3;
    let mut data = GeometryData::with_capacity(vertex_count, index_count, true);

    generate_torso(params, &mut data);
    generate_cap(params, true, &mut data);
    generate_cap(params, false, &mut data);

    log::debug!(
        "generated cylinder {}x{}: {} vertices, {} triangles",
        radial,
        rows,
        data.vertex_count(),
        data.triangle_count()
    );

    Ok(data)
}

fn generate_torso(params: &CylinderParams, data: &mut GeometryData) {
    let (radial, rows) = (params.radial_segments, params.height_segments);
    let slope = params.slope();

    for yy in 0..=rows {
        let v = yy as f32 / rows as f32;
        let radius = v * (params.radius_bottom - params.radius_top) + params.radius_top;

        for xx in 0..=radial {
            let u = xx as f32 / radial as f32;
            let (sin_theta, cos_theta) = (2.0 * PI * u).sin_cos();

            let position = [
                radius * sin_theta,
                (0.5 - v) * params.height,
                radius * cos_theta,
            ];
            let normal = Vector3::new(sin_theta, slope, cos_theta).normalize();
            data.push_vertex_uv(position, normal.into(), [u, 1.0 - v]);
        }
    }

    let row = radial + 1;
    for xx in 0..radial {
        for yy in 0..rows {
            let a = yy * row + xx;
            let b = (yy + 1) * row + xx;
            let c = (yy + 1) * row + xx + 1;
            let d = yy * row + xx + 1;

            data.push_triangle(a, b, d);
            data.push_triangle(b, c, d);
        }
    }
}

fn generate_cap(params: &CylinderParams, top: bool, data: &mut GeometryData) {
    let radial = params.radial_segments;
    let sign = if top { 1.0 } else { -1.0 };
    let radius = if top {
        params.radius_top
    } else {
        params.radius_bottom
    };
    let y = params.height * 0.5 * sign;
    let normal = [0.0, sign, 0.0];

    let center_start = data.vertex_count() as u32;
    for _ in 0..radial {
        data.push_vertex_uv([0.0, y, 0.0], normal, [0.5, 0.5]);
    }

    let ring_start = data.vertex_count() as u32;
    for xx in 0..=radial {
        let theta = xx as f32 / radial as f32 * 2.0 * PI;
        let (sin_theta, cos_theta) = theta.sin_cos();

        data.push_vertex_uv(
            [radius * sin_theta, y, radius * cos_theta],
            normal,
            [cos_theta * 0.5 + 0.5, sin_theta * 0.5 * sign + 0.5],
        );
    }

    for xx in 0..radial {
        let c = center_start + xx;
        let i = ring_start + xx;

        if top {
            data.push_triangle(i, i + 1, c);
        } else {
            data.push_triangle(i + 1, i, c);
        }
    }
}
