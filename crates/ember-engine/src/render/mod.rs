//! GPU rendering.
//!
//! Renderers own their GPU resources (pipelines, buffers) and create them lazily
//! on first use, rebuilding when the surface format changes.
//!
//! Convention:
//! - matrices come from `crate::math` with OpenGL clip depth `[-1, 1]`
//! - renderers remap depth to wgpu's `[0, 1]` before upload

mod camera_uniform;
mod ctx;
mod triangle;

pub use camera_uniform::{CameraUniform, GL_TO_WGPU_DEPTH};
pub use ctx::{RenderCtx, RenderTarget};
pub use triangle::TriangleRenderer;
