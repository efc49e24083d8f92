//! # Scene Module
//!
//! Shapes ready to hand to a renderer: generated geometry, a model transform
//! and the interleaved vertex format.
//!
//! ## Key Components
//!
//! - [`Shape`] - Generated geometry plus transform, with cached wireframe indices
//! - [`ShapeKind`] - Closed set of shape kinds and their parameters
//! - [`Transform`] - Position, rotation and scale with a lazily rebuilt matrix
//! - [`Vertex3D`] - Interleaved position, normal and texture coordinates
//!
//! ## Usage
//!
//! ```rust
//! use shape3d::gfx::geometry::CylinderParams;
//! use shape3d::gfx::scene::{Shape, ShapeKind};
//! use cgmath::Vector3;
//!
//! let mut shape = Shape::new(ShapeKind::Cylinder(CylinderParams::new(1.0, 2.0, 3.0)))?;
//! shape.set_position(Vector3::new(0.0, 1.5, 0.0));
//!
//! let model = shape.model_matrix_array();
//! let lines = shape.wireframe_indices().len();
//! # let _ = (model, lines);
//! # Ok::<(), shape3d::Error>(())
//! ```

pub mod shape;
pub mod transform;
pub mod vertex;

// Re-export main types
pub use shape::{Shape, ShapeKind};
pub use transform::Transform;
pub use vertex::Vertex3D;
