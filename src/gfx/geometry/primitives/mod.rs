//! # Primitive Shape Generation
//!
//! One module per shape. All shapes are centred on the origin with +Y up, and
//! every generator validates its parameters before allocating any buffer.

pub mod cone;
pub mod cube;
pub mod cube_sphere;
pub mod cylinder;
pub mod plane;
pub mod rounded_cube;
pub mod sphere;

pub use cone::{generate_cone, ConeParams};
pub use cube::{generate_cube, CubeParams};
pub use cube_sphere::{generate_cube_sphere, CubeSphereParams};
pub use cylinder::{generate_cylinder, CylinderParams};
pub use plane::{barycentric_coords, generate_plane, PlaneParams};
pub use rounded_cube::{generate_rounded_cube, round_corners, RoundedCubeParams};
pub use sphere::{generate_sphere, SphereParams};
