//! Normal helpers: flat per-triangle normals and normal visualisation lines

use cgmath::{InnerSpace, Vector3};

use super::GeometryData;

/// Line geometry for debug drawing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineData {
    /// Line end points
    pub positions: Vec<[f32; 3]>,
    /// Line-list indices, two per segment
    pub indices: Vec<u32>,
}

impl LineData {
    pub fn line_count(&self) -> usize {
        self.indices.len() / 2
    }
}

/// Calculate one normal per triangle of a non-indexed triangle soup
///
/// `positions` holds three consecutive vertices per triangle. The normal
/// `normalize(cross(b - a, c - a))` is written once for each of the three
/// vertices, so shading stays flat across the face. Degenerate triangles get a
/// zero normal.
pub fn flat_normals(positions: &[[f32; 3]]) -> Vec<[f32; 3]> {
    let mut normals = Vec::with_capacity(positions.len());

    for triangle in positions.chunks_exact(3) {
        let v0 = Vector3::from(triangle[0]);
        let v1 = Vector3::from(triangle[1]);
        let v2 = Vector3::from(triangle[2]);

        let face_normal = (v1 - v0).cross(v2 - v0);
        let normal = if face_normal.magnitude2() > 0.0 {
            face_normal.normalize()
        } else {
            Vector3::new(0.0, 0.0, 0.0)
        };

        normals.extend_from_slice(&[normal.into(), normal.into(), normal.into()]);
    }

    normals
}

/// Build one line per vertex, from the vertex along its normal
///
/// Vertex `i` produces the end points `2i` (on the surface) and `2i + 1`
/// (`length` away along the normal).
pub fn normal_lines(geometry: &GeometryData, length: f32) -> LineData {
    let mut lines = LineData {
        positions: Vec::with_capacity(geometry.vertex_count() * 2),
        indices: Vec::with_capacity(geometry.vertex_count() * 2),
    };

    for (i, (position, normal)) in geometry
        .positions
        .iter()
        .zip(&geometry.normals)
        .enumerate()
    {
        let start = Vector3::from(*position);
        let end = start + Vector3::from(*normal) * length;

        lines.positions.push(start.into());
        lines.positions.push(end.into());
        lines.indices.push(2 * i as u32);
        lines.indices.push(2 * i as u32 + 1);
    }

    lines
}
