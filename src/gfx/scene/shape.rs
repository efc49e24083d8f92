//! Shapes: generated geometry plus a model transform
//!
//! A [`Shape`] generates its buffers once, on construction, and keeps them
//! until [`Shape::regenerate`] is called with new parameters.

use cgmath::{Matrix4, Vector3};

use crate::error::Result;
use crate::gfx::geometry::{
    generate_cone, generate_cube, generate_cube_sphere, generate_cylinder, generate_plane,
    generate_rounded_cube, generate_sphere, normal_lines, ConeParams, CubeParams,
    CubeSphereParams, CylinderParams, GeometryData, IndexBuffer, LineData, PlaneParams,
    RoundedCubeParams, SphereParams,
};

use super::transform::Transform;

/// Every shape the generators can build, with its parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    Cube(CubeParams),
    RoundedCube(RoundedCubeParams),
    Sphere(SphereParams),
    CubeSphere(CubeSphereParams),
    Cone(ConeParams),
    Cylinder(CylinderParams),
    Plane(PlaneParams),
}

impl ShapeKind {
    /// Run the generator for this kind
    pub fn generate(&self) -> Result<GeometryData> {
        match self {
            ShapeKind::Cube(params) => generate_cube(params),
            ShapeKind::RoundedCube(params) => generate_rounded_cube(params),
            ShapeKind::Sphere(params) => generate_sphere(params),
            ShapeKind::CubeSphere(params) => generate_cube_sphere(params),
            ShapeKind::Cone(params) => generate_cone(params),
            ShapeKind::Cylinder(params) => generate_cylinder(params),
            ShapeKind::Plane(params) => generate_plane(params),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Cube(_) => "cube",
            ShapeKind::RoundedCube(_) => "rounded cube",
            ShapeKind::Sphere(_) => "sphere",
            ShapeKind::CubeSphere(_) => "cube sphere",
            ShapeKind::Cone(_) => "cone",
            ShapeKind::Cylinder(_) => "cylinder",
            ShapeKind::Plane(_) => "plane",
        }
    }
}

/// A generated shape with its transform
#[derive(Debug, Clone)]
pub struct Shape {
    kind: ShapeKind,
    geometry: GeometryData,
    transform: Transform,
    wireframe: Option<Vec<u32>>,
}

impl Shape {
    /// Generate the geometry for `kind`
    pub fn new(kind: ShapeKind) -> Result<Self> {
        let geometry = kind.generate()?;
        Ok(Self {
            kind,
            geometry,
            transform: Transform::default(),
            wireframe: None,
        })
    }

    /// Replace the parameters and rebuild the buffers
    ///
    /// On error the shape keeps its previous parameters and geometry.
    pub fn regenerate(&mut self, kind: ShapeKind) -> Result<()> {
        let geometry = kind.generate()?;
        log::debug!("regenerated {} ({} vertices)", kind.name(), geometry.vertex_count());

        self.kind = kind;
        self.geometry = geometry;
        self.wireframe = None;
        Ok(())
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn geometry(&self) -> &GeometryData {
        &self.geometry
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.geometry.positions
    }

    pub fn normals(&self) -> &[[f32; 3]] {
        &self.geometry.normals
    }

    pub fn uvs(&self) -> Option<&[[f32; 2]]> {
        self.geometry.uvs.as_deref()
    }

    pub fn indices(&self) -> &[u32] {
        &self.geometry.indices
    }

    /// Indices narrowed to the width the vertex count needs
    pub fn index_buffer(&self) -> Result<IndexBuffer> {
        self.geometry.index_buffer()
    }

    /// Line-list indices for every unique edge, computed on first use
    pub fn wireframe_indices(&mut self) -> &[u32] {
        let geometry = &self.geometry;
        self.wireframe
            .get_or_insert_with(|| geometry.wireframe_indices())
    }

    /// Line segments visualising each vertex normal
    pub fn normal_lines(&self, length: f32) -> LineData {
        normal_lines(&self.geometry, length)
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    pub fn set_position(&mut self, position: Vector3<f32>) {
        self.transform.set_position(position);
    }

    /// Euler angles in radians
    pub fn set_rotation(&mut self, rotation: Vector3<f32>) {
        self.transform.set_rotation(rotation);
    }

    pub fn set_scale(&mut self, scale: Vector3<f32>) {
        self.transform.set_scale(scale);
    }

    pub fn model_matrix(&mut self) -> Matrix4<f32> {
        self.transform.matrix()
    }

    pub fn model_matrix_array(&mut self) -> [[f32; 4]; 4] {
        self.transform.matrix_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::gfx::geometry::IndexFormat;

    fn all_kinds() -> Vec<ShapeKind> {
        vec![
            ShapeKind::Cube(CubeParams::default()),
            ShapeKind::RoundedCube(RoundedCubeParams::default()),
            ShapeKind::Sphere(SphereParams::default()),
            ShapeKind::CubeSphere(CubeSphereParams::default()),
            ShapeKind::Cone(ConeParams::default()),
            ShapeKind::Cylinder(CylinderParams::default()),
            ShapeKind::Plane(PlaneParams::default()),
        ]
    }

    #[test]
    fn test_defaults_generate() {
        for kind in all_kinds() {
            let shape = Shape::new(kind).unwrap();
            assert!(shape.geometry().triangle_count() > 0, "{}", shape.name());
            assert_eq!(shape.index_buffer().unwrap().format(), IndexFormat::Uint16);
        }
    }

    #[test]
    fn test_accessors_expose_geometry() {
        let shape = Shape::new(ShapeKind::Sphere(SphereParams::new(1.0).with_segments(6, 4))).unwrap();

        assert_eq!(shape.positions().len(), 35);
        assert_eq!(shape.normals().len(), 35);
        assert_eq!(shape.uvs().map(<[_]>::len), Some(35));
        assert_eq!(shape.indices().len(), shape.geometry().indices.len());
    }

    #[test]
    fn test_wireframe_cached_until_regenerate() {
        let mut shape = Shape::new(ShapeKind::CubeSphere(CubeSphereParams::new(1.0, 2))).unwrap();
        assert_eq!(shape.wireframe_indices().len(), 144);

        shape
            .regenerate(ShapeKind::Cube(CubeParams::new(1.0, 1.0, 1.0)))
            .unwrap();
        // 12 box edges plus one diagonal per face
        assert_eq!(shape.wireframe_indices().len(), 2 * 18);
    }

    #[test]
    fn test_failed_regenerate_keeps_shape() {
        let kind = ShapeKind::Cone(ConeParams::new(1.0, 1.0, 8));
        let mut shape = Shape::new(kind).unwrap();
        let before = shape.geometry().clone();

        let result = shape.regenerate(ShapeKind::Cone(ConeParams::new(1.0, 1.0, 2)));
        assert!(matches!(result, Err(Error::InvalidParameter { .. })));
        assert_eq!(shape.kind(), &kind);
        assert_eq!(shape.geometry(), &before);
    }

    #[test]
    fn test_invalid_kind_is_rejected() {
        let result = Shape::new(ShapeKind::Plane(PlaneParams::new(-1.0, 1.0)));
        assert!(result.is_err());
    }

    #[test]
    fn test_model_matrix_follows_setters() {
        let mut shape = Shape::new(ShapeKind::Plane(PlaneParams::default())).unwrap();
        assert_eq!(shape.model_matrix(), Matrix4::from_scale(1.0));

        shape.set_position(Vector3::new(1.0, 2.0, 3.0));
        shape.set_scale(Vector3::new(2.0, 2.0, 2.0));
        let m = shape.model_matrix_array();
        assert_eq!(m[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(m[0][0], 2.0);
    }

    #[test]
    fn test_transform_access_goes_through_methods() {
        let mut shape = Shape::new(ShapeKind::Plane(PlaneParams::default())).unwrap();
        assert!(!shape.transform().is_dirty());

        shape.transform_mut().set_uniform_scale(4.0);
        assert!(shape.transform().is_dirty());
        assert_eq!(shape.model_matrix(), Matrix4::from_scale(4.0));
        assert!(!shape.transform().is_dirty());

        shape.set_rotation(Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(shape.transform().rotation(), Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_normal_lines() {
        let shape = Shape::new(ShapeKind::Cube(CubeParams::new(2.0, 2.0, 2.0))).unwrap();
        let lines = shape.normal_lines(0.5);
        assert_eq!(lines.line_count(), 8);
    }
}
