use crate::coords::Viewport;
use crate::math::{perspective, Mat4};

/// Frustum parameters; the aspect ratio is taken from the viewport each frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Projection {
    /// Vertical field of view in radians, within `(0, π)`.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y: 90f32.to_radians(),
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Projection {
    /// Perspective matrix for `viewport`.
    ///
    /// Returns `None` for a zero-sized viewport (e.g. minimized window), where the
    /// aspect ratio is undefined.
    pub fn matrix(&self, viewport: Viewport) -> Option<Mat4> {
        if !viewport.is_valid() {
            return None;
        }
        Some(perspective(self.fov_y, viewport.aspect_ratio(), self.near, self.far))
    }
}
