//! 3D linear algebra used by the camera and renderers.
//!
//! Conventions:
//! - single precision throughout
//! - right-handed space, camera looks down -Z in view space
//! - column vectors; `Mat4` is column-major, so `a * b` applies `b` first
//! - clip depth is OpenGL style `[-1, 1]` (renderers remap for wgpu)
//!
//! Degenerate inputs (zero-length vectors, `near == far`, looking straight along
//! the up axis) are preconditions. They are not detected; IEEE-754 arithmetic
//! yields infinities or NaN which propagate silently.

/// Component-wise operators shared by the vector types.
///
/// Vector `*` is the Hadamard product, not a dot or cross product.
macro_rules! impl_vector_ops {
    ($ty:ident { $($field:ident),+ }) => {
        impl core::ops::Add for $ty {
            type Output = $ty;
            #[inline]
            fn add(self, rhs: $ty) -> $ty {
                $ty { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl core::ops::Sub for $ty {
            type Output = $ty;
            #[inline]
            fn sub(self, rhs: $ty) -> $ty {
                $ty { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl core::ops::Mul for $ty {
            type Output = $ty;
            #[inline]
            fn mul(self, rhs: $ty) -> $ty {
                $ty { $($field: self.$field * rhs.$field),+ }
            }
        }

        impl core::ops::Mul<f32> for $ty {
            type Output = $ty;
            #[inline]
            fn mul(self, rhs: f32) -> $ty {
                $ty { $($field: self.$field * rhs),+ }
            }
        }

        /// Division by `0.0` is not guarded and yields non-finite components.
        impl core::ops::Div<f32> for $ty {
            type Output = $ty;
            #[inline]
            fn div(self, rhs: f32) -> $ty {
                $ty { $($field: self.$field / rhs),+ }
            }
        }

        impl core::ops::Neg for $ty {
            type Output = $ty;
            #[inline]
            fn neg(self) -> $ty {
                $ty { $($field: -self.$field),+ }
            }
        }

        impl core::ops::AddAssign for $ty {
            #[inline]
            fn add_assign(&mut self, rhs: $ty) {
                $(self.$field += rhs.$field;)+
            }
        }

        impl core::ops::SubAssign for $ty {
            #[inline]
            fn sub_assign(&mut self, rhs: $ty) {
                $(self.$field -= rhs.$field;)+
            }
        }

        impl core::ops::MulAssign for $ty {
            #[inline]
            fn mul_assign(&mut self, rhs: $ty) {
                $(self.$field *= rhs.$field;)+
            }
        }

        /// Component-wise; zero components in `rhs` are not guarded.
        impl core::ops::DivAssign for $ty {
            #[inline]
            fn div_assign(&mut self, rhs: $ty) {
                $(self.$field /= rhs.$field;)+
            }
        }

        impl core::ops::MulAssign<f32> for $ty {
            #[inline]
            fn mul_assign(&mut self, rhs: f32) {
                $(self.$field *= rhs;)+
            }
        }

        impl core::ops::DivAssign<f32> for $ty {
            #[inline]
            fn div_assign(&mut self, rhs: f32) {
                $(self.$field /= rhs;)+
            }
        }

        impl core::ops::Index<usize> for $ty {
            type Output = f32;
            #[inline]
            fn index(&self, index: usize) -> &f32 {
                &self.as_array()[index]
            }
        }

        impl core::ops::IndexMut<usize> for $ty {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut f32 {
                &mut self.as_array_mut()[index]
            }
        }
    };
}

mod mat4;
mod transform;
mod vec3;
mod vec4;

pub use mat4::{identity, Mat4};
pub use transform::{look_at, perspective, rotate};
pub use vec3::{cross, normalize, Vec3};
pub use vec4::Vec4;
