use bytemuck::{Pod, Zeroable};

use super::Vec3;

/// 4D vector of `f32` components; also the column type of [`super::Mat4`].
///
/// Storage is `#[repr(C)]` `[x, y, z, w]` with no padding.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const ZERO: Vec4 = Vec4::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn r(self) -> f32 {
        self.x
    }

    #[inline]
    pub const fn g(self) -> f32 {
        self.y
    }

    #[inline]
    pub const fn b(self) -> f32 {
        self.z
    }

    #[inline]
    pub const fn a(self) -> f32 {
        self.w
    }

    #[inline]
    pub fn as_array(&self) -> &[f32; 4] {
        bytemuck::cast_ref(self)
    }

    #[inline]
    pub fn as_array_mut(&mut self) -> &mut [f32; 4] {
        bytemuck::cast_mut(self)
    }

    /// Drops `w`.
    #[inline]
    pub const fn truncate(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Norm over all four components, summed in `f64`.
    #[inline]
    pub fn length(self) -> f32 {
        let (x, y, z, w) = (self.x as f64, self.y as f64, self.z as f64, self.w as f64);
        (x * x + y * y + z * z + w * w).sqrt() as f32
    }

    /// Non-finite for the zero vector.
    #[inline]
    pub fn normalized(self) -> Vec4 {
        self / self.length()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }
}

impl_vector_ops!(Vec4 { x, y, z, w });
