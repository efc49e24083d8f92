//! # Shape3D Prelude
//!
//! Commonly used types in one import.
//!
//! ## Usage
//!
//! ```rust
//! use shape3d::prelude::*;
//!
//! let mut shape = Shape::new(ShapeKind::Sphere(SphereParams::new(1.0)))?;
//! shape.set_rotation(Vector3::new(0.0, 0.5, 0.0));
//! let indices = shape.index_buffer()?;
//! assert_eq!(indices.format(), IndexFormat::Uint16);
//! # Ok::<(), shape3d::Error>(())
//! ```

// Re-export errors
pub use crate::error::{Error, Result};

// Re-export geometry types and generators
pub use crate::gfx::geometry::{
    barycentric_coords, generate_cone, generate_cube, generate_cube_sphere, generate_cylinder,
    generate_plane, generate_rounded_cube, generate_sphere, generate_wireframe_indices,
    round_corners, ConeParams, CubeParams, CubeSphereParams, CylinderParams, GeometryData, IndexBuffer,
    IndexFormat, LineData, PlaneParams, RoundedCubeParams, SphereParams,
};

// Re-export scene types
pub use crate::gfx::scene::{Shape, ShapeKind, Transform, Vertex3D};

// Re-export common external dependencies
pub use cgmath::{InnerSpace, Matrix4, Vector3};
