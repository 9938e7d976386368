use bytemuck::{Pod, Zeroable};

use crate::math::{Mat4, Vec4};

/// Remaps OpenGL clip depth `[-w, w]` to wgpu's `[0, w]`: `z' = (z + w) / 2`.
pub const GL_TO_WGPU_DEPTH: Mat4 = Mat4::from_cols(
    Vec4::new(1.0, 0.0, 0.0, 0.0),
    Vec4::new(0.0, 1.0, 0.0, 0.0),
    Vec4::new(0.0, 0.0, 0.5, 0.0),
    Vec4::new(0.0, 0.0, 0.5, 1.0),
);

/// Camera block uploaded to `@group(0) @binding(0)`.
///
/// Two column-major `mat4x4<f32>` back to back (128 bytes). The projection is
/// stored already remapped to wgpu depth.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct CameraUniform {
    pub view: Mat4,
    pub projection: Mat4,
}

impl CameraUniform {
    /// `projection` uses OpenGL depth, as produced by `math::perspective`.
    pub fn new(view: Mat4, projection: Mat4) -> Self {
        Self {
            view,
            projection: GL_TO_WGPU_DEPTH * projection,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
