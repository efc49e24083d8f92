//! UV sphere using latitude/longitude parametrization
//!
//! Supports partial spheres through the phi (around Y) and theta (from the
//! north pole) ranges.

use std::f32::consts::PI;

use cgmath::{InnerSpace, Vector3};

use crate::error::Result;
use crate::gfx::geometry::params::{
    reject, require_finite, require_positive, require_segments, MIN_RADIAL_SEGMENTS,
};
use crate::gfx::geometry::{checked_vertex_count, GeometryData};

/// Tolerance for deciding whether the theta range touches a pole
const POLE_EPSILON: f32 = 1e-6;

/// Sphere radius, resolution and angular ranges (radians)
///
/// A theta range that starts within 1e-6 of 0 counts as touching the north
/// pole, and one that ends within 1e-6 of PI as touching the south pole. The
/// first or last row then drops the triangle collapsing onto the pole, so a
/// `theta_start` in `(0, 1e-6]` loses those nearly degenerate triangles too.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereParams {
    pub radius: f32,
    /// Segments around the Y axis
    pub width_segments: u32,
    /// Segments from pole to pole
    pub height_segments: u32,
    pub phi_start: f32,
    pub phi_length: f32,
    pub theta_start: f32,
    pub theta_length: f32,
}

impl Default for SphereParams {
    fn default() -> Self {
        Self {
            radius: 100.0,
            width_segments: 10,
            height_segments: 10,
            phi_start: 0.0,
            phi_length: 2.0 * PI,
            theta_start: 0.0,
            theta_length: PI,
        }
    }
}

impl SphereParams {
    /// A full sphere with default resolution
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            ..Default::default()
        }
    }

    pub fn with_segments(mut self, width_segments: u32, height_segments: u32) -> Self {
        self.width_segments = width_segments;
        self.height_segments = height_segments;
        self
    }

    pub fn with_phi(mut self, start: f32, length: f32) -> Self {
        self.phi_start = start;
        self.phi_length = length;
        self
    }

    pub fn with_theta(mut self, start: f32, length: f32) -> Self {
        self.theta_start = start;
        self.theta_length = length;
        self
    }

    pub fn theta_end(&self) -> f32 {
        self.theta_start + self.theta_length
    }

    pub fn validate(&self) -> Result<()> {
        require_positive("radius", self.radius)?;
        require_segments("width_segments", self.width_segments, MIN_RADIAL_SEGMENTS)?;
        require_segments("height_segments", self.height_segments, 1)?;
        require_finite("phi_start", self.phi_start)?;
        require_positive("phi_length", self.phi_length)?;
        require_positive("theta_length", self.theta_length)?;

        if !(self.theta_start.is_finite() && self.theta_start >= 0.0) {
            return Err(reject(
                "theta_start",
                format!("must be finite and >= 0, got {}", self.theta_start),
            ));
        }
        if self.theta_end() > PI + POLE_EPSILON {
            return Err(reject(
                "theta_length",
                format!("theta range ends at {} which is past PI", self.theta_end()),
            ));
        }
        Ok(())
    }

    /// Whether the first row starts at the north pole
    fn touches_north_pole(&self) -> bool {
        self.theta_start <= POLE_EPSILON
    }

    /// Whether the last row ends at the south pole
    fn touches_south_pole(&self) -> bool {
        self.theta_end() >= PI - POLE_EPSILON
    }
}

/// Generate a UV sphere centred at the origin
///
/// Rows that touch a pole skip the triangle that would collapse onto the pole
/// vertex, so a full sphere has `2 * w * h - 2 * w` triangles.
pub fn generate_sphere(params: &SphereParams) -> Result<GeometryData> {
    params.validate()?;

    let (w, h) = (params.width_segments, params.height_segments);
    let vertex_count =
        checked_vertex_count((u64::from(w) + 1) * (u64::from(h) + 1))?;
    let mut data = GeometryData::with_capacity(vertex_count, w as usize * h as usize * 6, true);

    for y in 0..=h {
        let v = y as f32 / h as f32;
        let theta = params.theta_start + params.theta_length * v;
        let (sin_theta, cos_theta) = theta.sin_cos();

        for x in 0..=w {
            let u = x as f32 / w as f32;
            let phi = params.phi_start + params.phi_length * u;
            let (sin_phi, cos_phi) = phi.sin_cos();

            let position = Vector3::new(-cos_phi * sin_theta, cos_theta, sin_phi * sin_theta)
                * params.radius;
            let normal = position.normalize();

            data.push_vertex_uv(position.into(), normal.into(), [u, 1.0 - v]);
        }
    }

    let row = w + 1;
    let skip_north = params.touches_north_pole();
    let skip_south = params.touches_south_pole();

    for y in 0..h {
        for x in 0..w {
            let a = y * row + x + 1;
            let b = y * row + x;
            let c = (y + 1) * row + x;
            let d = (y + 1) * row + x + 1;

            if y != 0 || !skip_north {
                data.push_triangle(a, b, d);
            }
            if y != h - 1 || !skip_south {
                data.push_triangle(b, c, d);
            }
        }
    }

    log::debug!(
        "generated sphere {}x{}: {} vertices, {} triangles",
        w,
        h,
        data.vertex_count(),
        data.triangle_count()
    );

    Ok(data)
}
