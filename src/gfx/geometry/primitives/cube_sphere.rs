//! Cube sphere: the ring lattice of a cube warped onto a sphere
//!
//! Each lattice point is mapped to `v` in `[-1, 1]^3` on the cube surface and
//! then through
//!
//! ```text
//! s.x = v.x * sqrt(1 - v.y²/2 - v.z²/2 + v.y²·v.z²/3)
//! ```
//!
//! (and cyclically for `y`, `z`). Unlike `normalize(v)` this spreads the cells
//! evenly instead of pinching them at the cube corners. `s` is unit length for
//! every point on the cube surface, so it doubles as the vertex normal.

use cgmath::Vector3;

use crate::error::Result;
use crate::gfx::geometry::lattice::{LatticePoint, RingLattice};
use crate::gfx::geometry::params::{require_positive, require_segments};
use crate::gfx::geometry::{checked_vertex_count, GeometryData};

/// Sphere radius and segments per cube edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeSphereParams {
    pub radius: f32,
    pub segments: u32,
}

impl Default for CubeSphereParams {
    fn default() -> Self {
        Self {
            radius: 100.0,
            segments: 10,
        }
    }
}

impl CubeSphereParams {
    pub fn new(radius: f32, segments: u32) -> Self {
        Self { radius, segments }
    }

    pub fn validate(&self) -> Result<()> {
        require_positive("radius", self.radius)?;
        require_segments("segments", self.segments, 1)?;
        Ok(())
    }
}

/// Map a point of the cube surface in `[-1, 1]^3` onto the unit sphere
pub fn warp_to_sphere(v: Vector3<f32>) -> Vector3<f32> {
    let (x2, y2, z2) = (v.x * v.x, v.y * v.y, v.z * v.z);
    Vector3::new(
        v.x * (1.0 - y2 / 2.0 - z2 / 2.0 + y2 * z2 / 3.0).sqrt(),
        v.y * (1.0 - x2 / 2.0 - z2 / 2.0 + x2 * z2 / 3.0).sqrt(),
        v.z * (1.0 - x2 / 2.0 - y2 / 2.0 + x2 * y2 / 3.0).sqrt(),
    )
}

/// Lattice point to cube coordinates; lattice `z = 0` is the front (+Z)
fn unit_cube_point(p: LatticePoint, segments: u32) -> Vector3<f32> {
    let s = segments as f32;
    Vector3::new(
        p.x as f32 * 2.0 / s - 1.0,
        p.y as f32 * 2.0 / s - 1.0,
        1.0 - p.z as f32 * 2.0 / s,
    )
}

/// Generate a cube sphere centred at the origin
///
/// The mesh has `6 * segments²` quads, i.e. `12 * segments²` triangles.
pub fn generate_cube_sphere(params: &CubeSphereParams) -> Result<GeometryData> {
    params.validate()?;

    let lattice = RingLattice::new(params.segments, params.segments, params.segments);
    let vertex_count = checked_vertex_count(lattice.vertex_count())?;
    let mut data =
        GeometryData::with_capacity(vertex_count, lattice.triangle_count() as usize * 3, false);

    for point in lattice.points() {
        let s = warp_to_sphere(unit_cube_point(point, params.segments));
        data.push_vertex((s * params.radius).into(), s.into());
    }
    data.indices = lattice.indices();

    log::debug!(
        "generated cube sphere with {} segments: {} vertices, {} triangles",
        params.segments,
        data.vertex_count(),
        data.triangle_count()
    );

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::InnerSpace;

    #[test]
    fn test_two_segment_fixture() {
        let sphere = generate_cube_sphere(&CubeSphereParams::new(1.0, 2)).unwrap();

        // 3 rings of 8 plus one interior vertex per cap
        assert_eq!(sphere.vertex_count(), 26);
        // 6 faces * 4 quads * 2 triangles
        assert_eq!(sphere.triangle_count(), 48);
        assert_eq!(sphere.wireframe_indices().len() / 2, 72);
    }

    #[test]
    fn test_quad_count_invariant() {
        for segments in 1..=6 {
            let sphere = generate_cube_sphere(&CubeSphereParams::new(1.0, segments)).unwrap();
            let quads = sphere.triangle_count() / 2;
            assert_eq!(quads, 6 * (segments * segments) as usize);
            assert!(sphere.indices.iter().all(|&i| (i as usize) < sphere.vertex_count()));
        }
    }

    #[test]
    fn test_warped_normals_are_unit_length() {
        let sphere = generate_cube_sphere(&CubeSphereParams::new(3.0, 5)).unwrap();
        for (p, n) in sphere.positions.iter().zip(&sphere.normals) {
            let n = Vector3::from(*n);
            assert!((n.magnitude() - 1.0).abs() < 1e-5);
            assert!((Vector3::from(*p) - n * 3.0).magnitude() < 1e-5);
        }
    }

    #[test]
    fn test_warp_fixed_points() {
        let face_center = warp_to_sphere(Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(face_center, Vector3::new(0.0, 0.0, 1.0));

        let corner = warp_to_sphere(Vector3::new(1.0, 1.0, 1.0));
        let expected = 1.0 / 3.0_f32.sqrt();
        assert!((corner.x - expected).abs() < 1e-6);
        assert!((corner.y - expected).abs() < 1e-6);
        assert!((corner.z - expected).abs() < 1e-6);
    }

    #[test]
    fn test_rejects_zero_segments() {
        assert!(generate_cube_sphere(&CubeSphereParams::new(1.0, 0)).is_err());
        assert!(generate_cube_sphere(&CubeSphereParams::new(0.0, 4)).is_err());
    }
}
