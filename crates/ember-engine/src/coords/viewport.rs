/// Drawable surface size in physical pixels.
///
/// Projections take their aspect ratio from here. A minimized window reports a
/// zero-sized viewport, which is not valid for projection.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn from_physical(size: winit::dpi::PhysicalSize<u32>) -> Self {
        Self::new(size.width as f32, size.height as f32)
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// `width / height`. Only meaningful when [`is_valid`](Self::is_valid) holds.
    #[inline]
    pub fn aspect_ratio(self) -> f32 {
        self.width / self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_height_is_invalid() {
        assert!(!Viewport::new(800.0, 0.0).is_valid());
        assert!(!Viewport::new(0.0, 600.0).is_valid());
        assert!(!Viewport::default().is_valid());
    }

    #[test]
    fn aspect_ratio_is_width_over_height() {
        let vp = Viewport::from_physical(winit::dpi::PhysicalSize::new(1280, 720));
        assert!(vp.is_valid());
        assert_eq!(vp.aspect_ratio(), 1280.0 / 720.0);
    }
}
