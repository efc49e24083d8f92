// src/lib.rs
//! Shape3D
//!
//! Procedural 3D mesh generation: cubes, rounded cubes, UV spheres, cube
//! spheres, cones, cylinders and planes as position, normal, uv and index
//! buffers, plus wireframe extraction and model transforms.

pub mod error;
pub mod gfx;
pub mod prelude;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use gfx::{GeometryData, Shape, ShapeKind};
