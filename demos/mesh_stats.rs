//! Generate every shape kind with its default parameters and print buffer stats
//!
//! Run with `RUST_LOG=debug` to see the generator logs.

use anyhow::Context;
use shape3d::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let kinds = [
        ShapeKind::Cube(CubeParams::default().with_segments(4, 4, 4)),
        ShapeKind::RoundedCube(RoundedCubeParams::new(
            CubeParams::default().with_segments(8, 8, 8),
            20.0,
        )),
        ShapeKind::Sphere(SphereParams::default().with_segments(32, 16)),
        ShapeKind::CubeSphere(CubeSphereParams::default()),
        ShapeKind::Cone(ConeParams::default()),
        ShapeKind::Cylinder(CylinderParams::new(20.0, 50.0, 100.0).with_segments(24, 4)),
        ShapeKind::Plane(PlaneParams::default().with_segments(10, 10)),
        // Past the 16-bit index range
        ShapeKind::CubeSphere(CubeSphereParams::new(100.0, 128)),
    ];

    println!(
        "{:<14} {:>9} {:>10} {:>8} {:>7}",
        "shape", "vertices", "triangles", "edges", "index"
    );

    for kind in kinds {
        let mut shape =
            Shape::new(kind).with_context(|| format!("failed to generate {}", kind.name()))?;
        let index_format = format!("{:?}", shape.index_buffer()?.format());
        let vertices = shape.geometry().vertex_count();
        let triangles = shape.geometry().triangle_count();
        let edges = shape.wireframe_indices().len() / 2;

        println!(
            "{:<14} {:>9} {:>10} {:>8} {:>7}",
            shape.name(),
            vertices,
            triangles,
            edges,
            index_format
        );
    }

    Ok(())
}
