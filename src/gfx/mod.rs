//! # Graphics Module
//!
//! Procedural shape generation and the scene-side types that carry the result
//! to a renderer.
//!
//! - **Geometry** ([`geometry`]) - Generators, index buffers, wireframe and normal helpers
//! - **Scene** ([`scene`]) - Shapes, transforms and vertex layout
//!
//! Nothing here talks to a GPU: buffers are plain vectors that can be uploaded
//! with any graphics API.

pub mod geometry;
pub mod scene;

// Re-export commonly used types
pub use geometry::GeometryData;
pub use scene::{Shape, ShapeKind, Transform};
