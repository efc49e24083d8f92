//! # Ring Lattice Topology
//!
//! The surface of a subdivided box described in integer lattice coordinates,
//! shared by the cube generators and the cube sphere.
//!
//! ## Vertex Order
//!
//! 1. `height + 1` perimeter rings, bottom to top. Each ring holds
//!    `2 * (width + depth)` vertices and walks the front side (`z = 0`) towards
//!    `+x`, then the right side (`x = width`), the back side (`z = depth`) and
//!    the left side (`x = 0`).
//! 2. The interior of the bottom cap (`y = 0`), row by row along `z`, then `x`.
//! 3. The interior of the top cap (`y = height`), in the same order.
//!
//! Lattice `z = 0` is the front of the box, so callers map it to `+Z` in world
//! space. With that mapping every triangle built by [`RingLattice::indices`]
//! winds counter-clockwise when seen from outside.

use super::quad::QuadWinding;

/// Integer coordinates of one lattice vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LatticePoint {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

/// Ring-walk topology of a `width x height x depth` segment box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingLattice {
    width: u32,
    height: u32,
    depth: u32,
}

impl RingLattice {
    /// Segment counts must be at least 1; generators validate this first.
    pub fn new(width: u32, height: u32, depth: u32) -> Self {
        debug_assert!(width >= 1 && height >= 1 && depth >= 1);
        Self {
            width,
            height,
            depth,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Number of vertices in one perimeter ring
    pub fn ring_len(&self) -> u32 {
        2 * (self.width + self.depth)
    }

    /// Vertices in one cap interior
    fn interior_len(&self) -> u32 {
        (self.width - 1) * (self.depth - 1)
    }

    /// Total vertex count, computed without overflow
    pub fn vertex_count(&self) -> u64 {
        let (w, h, d) = self.dims();
        2 * (w + d) * (h + 1) + 2 * (w - 1) * (d - 1)
    }

    /// Total triangle count: two per quad, `2 * (wh + hd + wd)` quads
    pub fn triangle_count(&self) -> u64 {
        let (w, h, d) = self.dims();
        4 * (w + d) * h + 4 * w * d
    }

    fn dims(&self) -> (u64, u64, u64) {
        (
            u64::from(self.width),
            u64::from(self.height),
            u64::from(self.depth),
        )
    }

    /// `(x, z)` of the `i`-th vertex of a ring
    pub fn ring_point(&self, i: u32) -> (u32, u32) {
        let (w, d) = (self.width, self.depth);
        if i <= w {
            (i, 0)
        } else if i <= w + d {
            (w, i - w)
        } else if i <= 2 * w + d {
            (2 * w + d - i, d)
        } else {
            (0, 2 * w + 2 * d - i)
        }
    }

    /// Position within a ring of the boundary point `(x, z)`
    fn ring_index(&self, x: u32, z: u32) -> u32 {
        let (w, d) = (self.width, self.depth);
        if z == 0 {
            x
        } else if x == w {
            w + z
        } else if z == d {
            w + d + (w - x)
        } else {
            2 * w + d + (d - z)
        }
    }

    fn interior_start(&self, y: u32) -> u32 {
        let rings = self.ring_len() * (self.height + 1);
        if y == 0 {
            rings
        } else {
            rings + self.interior_len()
        }
    }

    /// Vertex index of the cap point `(x, z)` on level `y` (`0` or `height`)
    fn cap_vertex(&self, y: u32, x: u32, z: u32) -> u32 {
        if x == 0 || x == self.width || z == 0 || z == self.depth {
            y * self.ring_len() + self.ring_index(x, z)
        } else {
            self.interior_start(y) + (z - 1) * (self.width - 1) + (x - 1)
        }
    }

    /// Every lattice vertex, in vertex-buffer order
    pub fn points(&self) -> impl Iterator<Item = LatticePoint> {
        let lattice = *self;
        let (w, h, d) = (self.width, self.height, self.depth);

        let rings = (0..=h).flat_map(move |y| {
            (0..lattice.ring_len()).map(move |i| {
                let (x, z) = lattice.ring_point(i);
                LatticePoint { x, y, z }
            })
        });

        let caps = [0, h].into_iter().flat_map(move |y| {
            (1..d).flat_map(move |z| (1..w).map(move |x| LatticePoint { x, y, z }))
        });

        rings.chain(caps)
    }

    /// Triangle indices for the whole closed surface
    pub fn indices(&self) -> Vec<u32> {
        let mut indices = Vec::with_capacity(self.triangle_count() as usize * 3);
        self.push_torso(&mut indices);
        self.push_cap(&mut indices, 0, QuadWinding::Top.inverted());
        self.push_cap(&mut indices, self.height, QuadWinding::Top);
        indices
    }

    fn push_torso(&self, indices: &mut Vec<u32>) {
        let ring = self.ring_len();
        for y in 0..self.height {
            let base = y * ring;
            for i in 0..ring {
                let next = (i + 1) % ring;
                QuadWinding::Top.push(
                    indices,
                    base + i,
                    base + next,
                    base + ring + next,
                    base + ring + i,
                );
            }
        }
    }

    /// Triangulate one cap
    ///
    /// When `width` or `depth` is 1 the cap has no interior vertices and every
    /// corner resolves to a ring vertex; otherwise the border cells stitch the
    /// ring to the interior grid.
    fn push_cap(&self, indices: &mut Vec<u32>, y: u32, winding: QuadWinding) {
        for z in 0..self.depth {
            for x in 0..self.width {
                winding.push(
                    indices,
                    self.cap_vertex(y, x, z),
                    self.cap_vertex(y, x + 1, z),
                    self.cap_vertex(y, x + 1, z + 1),
                    self.cap_vertex(y, x, z + 1),
                );
            }
        }
    }
}
