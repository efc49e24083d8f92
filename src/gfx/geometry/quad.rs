//! # Quad Triangulation
//!
//! Splits a quadrilateral given by four corner indices into two triangles.
//!
//! Two winding conventions are used by the generators:
//!
//! - **Top** `(a, b, c), (c, d, a)`: counter-clockwise when the corners `a → b → c → d`
//!   run counter-clockwise as seen by the viewer.
//! - **Side** `(b, a, c), (d, c, a)`: the mirror of the top convention.
//!
//! A surface picks one convention for its outward faces and uses
//! [`QuadWinding::inverted`] for the faces looking the other way (a bottom cap
//! against a top cap), so every triangle of a closed shape winds outward.

/// Quad winding convention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadWinding {
    /// `(a, b, c), (c, d, a)`
    Top,
    /// `(b, a, c), (d, c, a)`
    Side,
}

impl QuadWinding {
    /// The opposite convention
    pub fn inverted(self) -> Self {
        match self {
            QuadWinding::Top => QuadWinding::Side,
            QuadWinding::Side => QuadWinding::Top,
        }
    }

    /// Triangulate one quad
    pub fn quad(self, a: u32, b: u32, c: u32, d: u32) -> [u32; 6] {
        match self {
            QuadWinding::Top => set_top_quad(a, b, c, d),
            QuadWinding::Side => set_quad(a, b, c, d),
        }
    }

    /// Triangulate one quad and append it to `indices`
    pub fn push(self, indices: &mut Vec<u32>, a: u32, b: u32, c: u32, d: u32) {
        indices.extend_from_slice(&self.quad(a, b, c, d));
    }
}

/// Top-quad winding: `(a, b, c), (c, d, a)`
pub fn set_top_quad(a: u32, b: u32, c: u32, d: u32) -> [u32; 6] {
    [a, b, c, c, d, a]
}

/// Side-quad winding: `(b, a, c), (d, c, a)`
pub fn set_quad(a: u32, b: u32, c: u32, d: u32) -> [u32; 6] {
    [b, a, c, d, c, a]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Signed area of the triangle `(a, b, c)` over 2D corner positions
    fn signed_area(corners: &[[f32; 2]; 4], tri: &[u32]) -> f32 {
        let [a, b, c] = [
            corners[tri[0] as usize],
            corners[tri[1] as usize],
            corners[tri[2] as usize],
        ];
        (b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1])
    }

    #[test]
    fn test_top_quad_is_counter_clockwise() {
        // Unit square, corners counter-clockwise
        let corners = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        let indices = set_top_quad(0, 1, 2, 3);

        for tri in indices.chunks(3) {
            assert!(signed_area(&corners, tri) > 0.0);
        }
    }

    #[test]
    fn test_side_quad_is_clockwise() {
        let corners = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        let indices = set_quad(0, 1, 2, 3);

        for tri in indices.chunks(3) {
            assert!(signed_area(&corners, tri) < 0.0);
        }
    }

    #[test]
    fn test_inverted_round_trip() {
        assert_eq!(QuadWinding::Top.inverted(), QuadWinding::Side);
        assert_eq!(QuadWinding::Top.inverted().inverted(), QuadWinding::Top);

        let mut indices = Vec::new();
        QuadWinding::Side.push(&mut indices, 4, 5, 6, 7);
        assert_eq!(indices, vec![5, 4, 6, 7, 6, 4]);
    }
}
