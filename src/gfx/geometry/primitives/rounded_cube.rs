//! Rounded box: the cube topology with its vertices projected onto a rounded surface

use cgmath::{InnerSpace, Vector3};

use crate::error::Result;
use crate::gfx::geometry::params::{reject, require_positive};
use crate::gfx::geometry::GeometryData;

use super::cube::{generate_cube, CubeParams};

/// Box parameters plus the corner radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedCubeParams {
    pub cube: CubeParams,
    pub roundness: f32,
}

impl Default for RoundedCubeParams {
    fn default() -> Self {
        Self {
            cube: CubeParams::default(),
            roundness: 2.0,
        }
    }
}

impl RoundedCubeParams {
    pub fn new(cube: CubeParams, roundness: f32) -> Self {
        Self { cube, roundness }
    }

    pub fn validate(&self) -> Result<()> {
        self.cube.validate()?;
        validate_roundness(&self.cube, self.roundness)
    }
}

/// Roundness must lie in `(0, min(width, height, depth) / 2]`
fn validate_roundness(cube: &CubeParams, roundness: f32) -> Result<()> {
    require_positive("roundness", roundness)?;

    let limit = cube.width.min(cube.height).min(cube.depth) * 0.5;
    if roundness > limit {
        return Err(reject(
            "roundness",
            format!("must not exceed half the smallest dimension ({}), got {}", limit, roundness),
        ));
    }
    Ok(())
}

/// Generate a box whose edges and corners are rounded with radius `roundness`
pub fn generate_rounded_cube(params: &RoundedCubeParams) -> Result<GeometryData> {
    params.validate()?;
    let cube = generate_cube(&params.cube)?;
    round_corners(cube, &params.cube, params.roundness)
}

/// Push every vertex of a cube mesh onto the rounded surface
///
/// Each vertex is clamped into the inner box shrunk by `roundness`; the
/// direction from the clamped point back to the vertex becomes its normal, and
/// the vertex moves to `clamped + normal * roundness`. The index buffer is left
/// untouched. `cube` must be the output of [`generate_cube`] for `params`:
/// a mesh with a different vertex count, or with a vertex inside the inner
/// box, is rejected.
pub fn round_corners(
    mut cube: GeometryData,
    params: &CubeParams,
    roundness: f32,
) -> Result<GeometryData> {
    params.validate()?;
    validate_roundness(params, roundness)?;

    let expected = params.lattice().vertex_count();
    if cube.vertex_count() as u64 != expected || cube.normals.len() != cube.vertex_count() {
        return Err(reject(
            "cube",
            format!(
                "expected the {} vertices of the cube mesh, got {}",
                expected,
                cube.vertex_count()
            ),
        ));
    }

    let inner = params.half_extents() - Vector3::new(roundness, roundness, roundness);

    for (position, normal) in cube.positions.iter_mut().zip(cube.normals.iter_mut()) {
        let p = Vector3::from(*position);
        let clamped = Vector3::new(
            p.x.clamp(-inner.x, inner.x),
            p.y.clamp(-inner.y, inner.y),
            p.z.clamp(-inner.z, inner.z),
        );

        let offset = p - clamped;
        if !(offset.magnitude2() > 0.0) {
            return Err(reject(
                "cube",
                format!("vertex {:?} lies inside the rounded core", *position),
            ));
        }
        let n = offset.normalize();
        *position = (clamped + n * roundness).into();
        *normal = n.into();
    }

    log::debug!(
        "rounded {} cube vertices with roundness {}",
        cube.vertex_count(),
        roundness
    );

    Ok(cube)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_topology_is_unchanged() {
        let cube_params = CubeParams::new(4.0, 4.0, 4.0).with_segments(3, 2, 4);
        let cube = generate_cube(&cube_params).unwrap();
        let rounded = generate_rounded_cube(&RoundedCubeParams::new(cube_params, 1.0)).unwrap();

        assert_eq!(rounded.indices, cube.indices);
        assert_eq!(rounded.vertex_count(), cube.vertex_count());
    }

    #[test]
    fn test_vertices_lie_on_rounded_surface() {
        let cube_params = CubeParams::new(4.0, 6.0, 8.0).with_segments(4, 4, 4);
        let roundness = 1.5;
        let rounded = generate_rounded_cube(&RoundedCubeParams::new(cube_params, roundness)).unwrap();
        let inner = cube_params.half_extents() - Vector3::new(roundness, roundness, roundness);

        for p in &rounded.positions {
            let p = Vector3::from(*p);
            let clamped = Vector3::new(
                p.x.clamp(-inner.x, inner.x),
                p.y.clamp(-inner.y, inner.y),
                p.z.clamp(-inner.z, inner.z),
            );
            assert!(((p - clamped).magnitude() - roundness).abs() < 1e-4);
        }
    }

    #[test]
    fn test_tiny_roundness_converges_to_cube() {
        let cube_params = CubeParams::new(2.0, 3.0, 1.0).with_segments(2, 3, 2);
        let cube = generate_cube(&cube_params).unwrap();
        let rounded =
            generate_rounded_cube(&RoundedCubeParams::new(cube_params, 1e-4)).unwrap();

        for (a, b) in cube.positions.iter().zip(&rounded.positions) {
            for axis in 0..3 {
                assert!((a[axis] - b[axis]).abs() < 1e-3);
            }
        }
        for (a, b) in cube.normals.iter().zip(&rounded.normals) {
            for axis in 0..3 {
                assert!((a[axis] - b[axis]).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn test_maximal_roundness_gives_sphere_like_cube() {
        let cube_params = CubeParams::new(2.0, 2.0, 2.0).with_segments(4, 4, 4);
        let rounded = generate_rounded_cube(&RoundedCubeParams::new(cube_params, 1.0)).unwrap();

        for (p, n) in rounded.positions.iter().zip(&rounded.normals) {
            let p = Vector3::from(*p);
            assert!((p.magnitude() - 1.0).abs() < 1e-5);
            assert!((p - Vector3::from(*n)).magnitude() < 1e-5);
        }
    }

    #[test]
    fn test_roundness_bounds() {
        let cube_params = CubeParams::new(2.0, 4.0, 4.0);

        for bad in [0.0, -1.0, 1.01, f32::NAN] {
            let result = generate_rounded_cube(&RoundedCubeParams::new(cube_params, bad));
            assert!(matches!(
                result,
                Err(Error::InvalidParameter {
                    name: "roundness",
                    ..
                })
            ));
        }
        assert!(generate_rounded_cube(&RoundedCubeParams::new(cube_params, 1.0)).is_ok());
    }

    #[test]
    fn test_round_corners_rejects_foreign_mesh() {
        use crate::gfx::geometry::{generate_plane, PlaneParams};

        let cube_params = CubeParams::new(2.0, 2.0, 2.0);
        let plane = generate_plane(&PlaneParams::new(1.0, 1.0).with_segments(2, 2)).unwrap();

        assert!(matches!(
            round_corners(plane, &cube_params, 0.5),
            Err(Error::InvalidParameter { name: "cube", .. })
        ));
    }

    #[test]
    fn test_round_corners_rejects_vertex_in_core() {
        let cube_params = CubeParams::new(2.0, 2.0, 2.0);
        let mut cube = generate_cube(&cube_params).unwrap();
        cube.positions[0] = [0.0, 0.0, 0.0];

        assert!(matches!(
            round_corners(cube, &cube_params, 0.5),
            Err(Error::InvalidParameter { name: "cube", .. })
        ));
    }

    #[test]
    fn test_round_corners_accepts_matching_cube() {
        let cube_params = CubeParams::new(2.0, 2.0, 2.0).with_segments(2, 2, 2);
        let cube = generate_cube(&cube_params).unwrap();
        let rounded = round_corners(cube, &cube_params, 0.5).unwrap();

        assert!(rounded
            .positions
            .iter()
            .chain(&rounded.normals)
            .all(|v| v.iter().all(|c| c.is_finite())));
    }
}
