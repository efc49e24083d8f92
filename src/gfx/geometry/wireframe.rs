//! # Wireframe Extraction
//!
//! Derives a line list from a triangle list: one index pair for every unique
//! undirected edge, in order of first appearance. No vertices are added.

use std::collections::HashSet;
use std::hash::Hash;

/// Build line-list indices for the unique edges of a triangle list
///
/// A trailing partial triangle is ignored.
pub fn generate_wireframe_indices<I>(indices: &[I]) -> Vec<I>
where
    I: Copy + Ord + Hash,
{
    let triangles = indices.chunks_exact(3);
    if !triangles.remainder().is_empty() {
        log::warn!(
            "index list length {} is not a multiple of 3, ignoring the trailing {} indices",
            indices.len(),
            triangles.remainder().len()
        );
    }

    let mut seen = HashSet::with_capacity(indices.len());
    let mut lines = Vec::with_capacity(indices.len() * 2);

    for tri in triangles {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            if seen.insert((a.min(b), a.max(b))) {
                lines.push(a);
                lines.push(b);
            }
        }
    }

    log::trace!(
        "extracted {} unique edges from {} triangles",
        lines.len() / 2,
        indices.len() / 3
    );

    lines
}
