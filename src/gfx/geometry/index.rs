//! Index buffer width selection
//!
//! Generators always build `u32` indices. Before upload they are narrowed to
//! `u16` whenever the vertex count allows it, and widened otherwise.

use crate::error::{Error, Result};

use super::wireframe::generate_wireframe_indices;

/// Largest vertex count addressable by 16-bit indices
pub const MAX_U16_VERTICES: usize = u16::MAX as usize + 1;

/// Element type of an index buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexFormat {
    Uint16,
    Uint32,
}

impl IndexFormat {
    /// Narrowest format able to address `vertex_count` vertices
    pub fn for_vertex_count(vertex_count: usize) -> Result<Self> {
        if vertex_count <= MAX_U16_VERTICES {
            Ok(IndexFormat::Uint16)
        } else if vertex_count as u64 <= u64::from(u32::MAX) + 1 {
            Ok(IndexFormat::Uint32)
        } else {
            Err(Error::index_overflow(vertex_count as u64, IndexFormat::Uint32))
        }
    }

    /// Size of one index in bytes
    pub fn byte_size(self) -> usize {
        match self {
            IndexFormat::Uint16 => 2,
            IndexFormat::Uint32 => 4,
        }
    }
}

/// Index data in the width chosen for its vertex count
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexBuffer {
    Uint16(Vec<u16>),
    Uint32(Vec<u32>),
}

impl IndexBuffer {
    /// Pack `indices` into the narrowest format for `vertex_count`
    ///
    /// Fails if any index does not address one of the `vertex_count` vertices.
    pub fn from_indices(indices: &[u32], vertex_count: usize) -> Result<Self> {
        if let Some(&max) = indices.iter().max() {
            if max as usize >= vertex_count {
                return Err(Error::invalid_parameter(
                    "indices",
                    format!("index {} out of range for {} vertices", max, vertex_count),
                ));
            }
        }

        match IndexFormat::for_vertex_count(vertex_count)? {
            IndexFormat::Uint16 => Ok(IndexBuffer::Uint16(
                indices.iter().map(|&i| i as u16).collect(),
            )),
            IndexFormat::Uint32 => {
                log::warn!(
                    "{} vertices exceed the 16-bit index range, using 32-bit indices",
                    vertex_count
                );
                Ok(IndexBuffer::Uint32(indices.to_vec()))
            }
        }
    }

    /// Force 16-bit indices, failing instead of truncating
    pub fn to_u16(&self) -> Result<Vec<u16>> {
        match self {
            IndexBuffer::Uint16(indices) => Ok(indices.clone()),
            IndexBuffer::Uint32(indices) => indices
                .iter()
                .map(|&i| {
                    u16::try_from(i).map_err(|_| {
                        Error::index_overflow(u64::from(i) + 1, IndexFormat::Uint16)
                    })
                })
                .collect(),
        }
    }

    pub fn format(&self) -> IndexFormat {
        match self {
            IndexBuffer::Uint16(_) => IndexFormat::Uint16,
            IndexBuffer::Uint32(_) => IndexFormat::Uint32,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            IndexBuffer::Uint16(indices) => indices.len(),
            IndexBuffer::Uint32(indices) => indices.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index at position `i`, widened to `u32`
    pub fn get(&self, i: usize) -> Option<u32> {
        match self {
            IndexBuffer::Uint16(indices) => indices.get(i).map(|&v| u32::from(v)),
            IndexBuffer::Uint32(indices) => indices.get(i).copied(),
        }
    }

    /// Raw bytes for upload
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            IndexBuffer::Uint16(indices) => bytemuck::cast_slice(indices),
            IndexBuffer::Uint32(indices) => bytemuck::cast_slice(indices),
        }
    }

    /// Line-list indices for every unique edge, in the same width
    pub fn wireframe(&self) -> IndexBuffer {
        match self {
            IndexBuffer::Uint16(indices) => IndexBuffer::Uint16(generate_wireframe_indices(indices)),
            IndexBuffer::Uint32(indices) => IndexBuffer::Uint32(generate_wireframe_indices(indices)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_boundary() {
        assert_eq!(IndexFormat::for_vertex_count(0).unwrap(), IndexFormat::Uint16);
        assert_eq!(
            IndexFormat::for_vertex_count(MAX_U16_VERTICES).unwrap(),
            IndexFormat::Uint16
        );
        assert_eq!(
            IndexFormat::for_vertex_count(MAX_U16_VERTICES + 1).unwrap(),
            IndexFormat::Uint32
        );
    }

    #[test]
    fn test_narrowing_keeps_values() {
        let buffer = IndexBuffer::from_indices(&[0, 1, 2, 2, 3, 0], 4).unwrap();
        assert_eq!(buffer, IndexBuffer::Uint16(vec![0, 1, 2, 2, 3, 0]));
        assert_eq!(buffer.as_bytes().len(), 12);
        assert_eq!(buffer.get(4), Some(3));
    }

    #[test]
    fn test_widening_for_large_meshes() {
        let vertex_count = MAX_U16_VERTICES + 10;
        let last = (vertex_count - 1) as u32;
        let buffer = IndexBuffer::from_indices(&[0, 1, last], vertex_count).unwrap();

        assert_eq!(buffer.format(), IndexFormat::Uint32);
        assert_eq!(buffer.as_bytes().len(), 12);
        assert!(matches!(
            buffer.to_u16(),
            Err(Error::IndexOverflow {
                format: IndexFormat::Uint16,
                ..
            })
        ));
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        assert!(IndexBuffer::from_indices(&[0, 1, 3], 3).is_err());
    }

    #[test]
    fn test_wireframe_keeps_width() {
        let buffer = IndexBuffer::from_indices(&[0, 1, 2], 3).unwrap();
        let lines = buffer.wireframe();
        assert_eq!(lines.format(), IndexFormat::Uint16);
        assert_eq!(lines.len(), 6);
    }
}
