//! Model transform with lazily rebuilt matrix

use cgmath::{Matrix4, Rad, SquareMatrix, Vector3};

/// Position, Euler rotation (radians, applied X then Y then Z in the matrix
/// product) and per-axis scale of a shape
///
/// The model matrix is `T * S * Rx * Ry * Rz`. Setters only mark the transform
/// dirty; the matrix is rebuilt on the next [`Transform::matrix`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    position: Vector3<f32>,
    rotation: Vector3<f32>,
    scale: Vector3<f32>,
    matrix: Matrix4<f32>,
    dirty: bool,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, 0.0),
            rotation: Vector3::new(0.0, 0.0, 0.0),
            scale: Vector3::new(1.0, 1.0, 1.0),
            matrix: Matrix4::identity(),
            dirty: false,
        }
    }
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Vector3<f32> {
        self.position
    }

    pub fn rotation(&self) -> Vector3<f32> {
        self.rotation
    }

    pub fn scale(&self) -> Vector3<f32> {
        self.scale
    }

    /// Whether the cached matrix is stale
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn set_position(&mut self, position: Vector3<f32>) {
        self.position = position;
        self.dirty = true;
    }

    /// Set the Euler angles in radians
    pub fn set_rotation(&mut self, rotation: Vector3<f32>) {
        self.rotation = rotation;
        self.dirty = true;
    }

    pub fn set_scale(&mut self, scale: Vector3<f32>) {
        self.scale = scale;
        self.dirty = true;
    }

    pub fn set_uniform_scale(&mut self, scale: f32) {
        self.set_scale(Vector3::new(scale, scale, scale));
    }

    /// Model matrix, rebuilt only if a setter ran since the last call
    pub fn matrix(&mut self) -> Matrix4<f32> {
        if self.dirty {
            self.matrix = self.compose();
            self.dirty = false;
        }
        self.matrix
    }

    /// Model matrix as column-major arrays, ready for a uniform buffer
    pub fn matrix_array(&mut self) -> [[f32; 4]; 4] {
        self.matrix().into()
    }

    fn compose(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position)
            * Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z)
            * Matrix4::from_angle_x(Rad(self.rotation.x))
            * Matrix4::from_angle_y(Rad(self.rotation.y))
            * Matrix4::from_angle_z(Rad(self.rotation.z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{InnerSpace, Vector4};
    use std::f32::consts::FRAC_PI_2;

    fn assert_close(a: Vector4<f32>, b: Vector4<f32>) {
        assert!((a - b).magnitude() < 1e-5, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_default_is_identity() {
        let mut transform = Transform::new();
        assert!(!transform.is_dirty());
        assert_eq!(transform.matrix(), Matrix4::identity());
        assert_eq!(
            transform.matrix_array(),
            [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ]
        );
    }

    #[test]
    fn test_composition_order() {
        let mut transform = Transform::new();
        transform.set_position(Vector3::new(10.0, 0.0, 0.0));
        transform.set_scale(Vector3::new(2.0, 1.0, 1.0));
        transform.set_rotation(Vector3::new(0.0, 0.0, FRAC_PI_2));

        // Rz takes +Y to -X, S doubles it, T shifts it
        let p = transform.matrix() * Vector4::new(0.0, 1.0, 0.0, 1.0);
        assert_close(p, Vector4::new(8.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_rotation_applies_z_before_x() {
        let mut transform = Transform::new();
        transform.set_rotation(Vector3::new(FRAC_PI_2, 0.0, FRAC_PI_2));

        // Rz: +X -> +Y, then Rx: +Y -> +Z
        let p = transform.matrix() * Vector4::new(1.0, 0.0, 0.0, 1.0);
        assert_close(p, Vector4::new(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn test_matrix_rebuilt_only_when_dirty() {
        let mut transform = Transform::new();
        transform.set_uniform_scale(3.0);
        assert!(transform.is_dirty());

        let first = transform.matrix();
        assert!(!transform.is_dirty());
        assert_eq!(first, Matrix4::from_scale(3.0));
        assert_eq!(transform.matrix(), first);

        transform.set_position(Vector3::new(0.0, 1.0, 0.0));
        assert!(transform.is_dirty());
        assert_ne!(transform.matrix(), first);
    }
}
