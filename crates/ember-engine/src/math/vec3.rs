use bytemuck::{Pod, Zeroable};

use super::Vec4;

/// 3D vector of `f32` components.
///
/// Storage is `#[repr(C)]` `[x, y, z]` with no padding. The same components can be
/// read as a color (`r`, `g`, `b`) or as a flat array via [`Vec3::as_array`].
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
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

    /// Flat `[x, y, z]` view over the same storage.
    #[inline]
    pub fn as_array(&self) -> &[f32; 3] {
        bytemuck::cast_ref(self)
    }

    #[inline]
    pub fn as_array_mut(&mut self) -> &mut [f32; 3] {
        bytemuck::cast_mut(self)
    }

    #[inline]
    pub fn dot(self, rhs: Vec3) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Euclidean norm.
    ///
    /// Squares are summed in `f64` and the root is narrowed back to `f32`.
    #[inline]
    pub fn length(self) -> f32 {
        let (x, y, z) = (self.x as f64, self.y as f64, self.z as f64);
        (x * x + y * y + z * z).sqrt() as f32
    }

    /// Returns `self / self.length()`.
    ///
    /// The zero vector has no direction; the result is NaN in every component.
    #[inline]
    pub fn normalized(self) -> Vec3 {
        self / self.length()
    }

    /// Right-handed cross product. Zero for parallel inputs.
    #[inline]
    pub fn cross(self, rhs: Vec3) -> Vec3 {
        Vec3::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Appends `w`, e.g. `1.0` for a point or `0.0` for a direction.
    #[inline]
    pub const fn extend(self, w: f32) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, w)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl_vector_ops!(Vec3 { x, y, z });

/// Unit vector in the direction of `v`. `v` must be non-zero.
#[inline]
pub fn normalize(v: Vec3) -> Vec3 {
    v.normalized()
}

/// Right-handed cross product `a × b`.
#[inline]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    a.cross(b)
}
