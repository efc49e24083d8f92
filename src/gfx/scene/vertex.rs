//! # Vertex Data Structures
//!
//! Interleaved vertex format for uploading generated shapes in a single buffer.

/// A 3D vertex with position, normal and texture coordinates.
///
/// # Memory Layout
///
/// The `#[repr(C)]` attribute ensures the struct has a C-compatible memory
/// layout, so a `&[Vertex3D]` can be cast straight to bytes with
/// [`bytemuck::cast_slice`].
///
/// | Attribute  | Offset | Format      |
/// |------------|--------|-------------|
/// | position   | 0      | `f32 x 3`   |
/// | normal     | 12     | `f32 x 3`   |
/// | tex_coord  | 24     | `f32 x 2`   |
///
/// # Examples
///
/// ```
/// use shape3d::gfx::scene::vertex::Vertex3D;
///
/// let vertex = Vertex3D {
///     position: [0.0, 1.0, 0.0],
///     normal: [0.0, 1.0, 0.0],
///     tex_coord: [0.5, 0.5],
/// };
/// assert_eq!(Vertex3D::as_bytes(&[vertex]).len(), Vertex3D::STRIDE);
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex3D {
    /// 3D position coordinates [x, y, z]
    pub position: [f32; 3],
    /// 3D normal vector [nx, ny, nz] for lighting calculations
    pub normal: [f32; 3],
    /// Texture coordinates [u, v], zero for shapes without uvs
    pub tex_coord: [f32; 2],
}

impl Vertex3D {
    /// Size of one vertex in bytes
    pub const STRIDE: usize = std::mem::size_of::<Vertex3D>();

    /// Byte offset of the normal attribute
    pub const NORMAL_OFFSET: usize = std::mem::size_of::<[f32; 3]>();

    /// Byte offset of the texture coordinate attribute
    pub const TEX_COORD_OFFSET: usize = 2 * std::mem::size_of::<[f32; 3]>();

    /// View a vertex slice as raw bytes for upload
    pub fn as_bytes(vertices: &[Vertex3D]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}
