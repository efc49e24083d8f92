//! Error types for shape generation

use thiserror::Error;

use crate::gfx::geometry::IndexFormat;

/// Shape generation result type
pub type Result<T> = std::result::Result<T, Error>;

/// Shape generation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A shape parameter is outside its valid range
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// The vertex count cannot be addressed by the index type
    #[error("Index overflow: {vertex_count} vertices do not fit {format:?} indices")]
    IndexOverflow {
        vertex_count: u64,
        format: IndexFormat,
    },
}

impl Error {
    /// Create an invalid parameter error
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Create an index overflow error
    pub fn index_overflow(vertex_count: u64, format: IndexFormat) -> Self {
        Error::IndexOverflow {
            vertex_count,
            format,
        }
    }
}
