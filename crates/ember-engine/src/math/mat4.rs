use core::ops::Mul;

use bytemuck::{Pod, Zeroable};

use super::{Vec3, Vec4};

/// 4x4 matrix stored as four column vectors.
///
/// `col[i][j]` is the element at row `j`, column `i`. The flat layout
/// ([`Mat4::as_array`]) is 16 column-major floats with no padding between
/// columns, which is what a WGSL `mat4x4<f32>` uniform expects.
///
/// Multiplication follows the column-vector convention: `a * b` is the
/// transform that applies `b` first, then `a`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Mat4 {
    pub col: [Vec4; 4],
}

impl Mat4 {
    pub const ZERO: Mat4 = Mat4::from_cols(Vec4::ZERO, Vec4::ZERO, Vec4::ZERO, Vec4::ZERO);

    pub const IDENTITY: Mat4 = Mat4::from_cols(
        Vec4::new(1.0, 0.0, 0.0, 0.0),
        Vec4::new(0.0, 1.0, 0.0, 0.0),
        Vec4::new(0.0, 0.0, 1.0, 0.0),
        Vec4::new(0.0, 0.0, 0.0, 1.0),
    );

    #[inline]
    pub const fn from_cols(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        Self { col: [c0, c1, c2, c3] }
    }

    /// Translation by `t` (stored in the fourth column).
    #[inline]
    pub const fn from_translation(t: Vec3) -> Self {
        Self::from_cols(
            Vec4::new(1.0, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 1.0, 0.0, 0.0),
            Vec4::new(0.0, 0.0, 1.0, 0.0),
            Vec4::new(t.x, t.y, t.z, 1.0),
        )
    }

    /// Flat column-major view: element `(row, col)` is at `col * 4 + row`.
    #[inline]
    pub fn as_array(&self) -> &[f32; 16] {
        bytemuck::cast_ref(self)
    }

    /// Raw bytes for uniform uploads.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.col.iter().all(|c| c.is_finite())
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    /// Column `i` of the result is the combination of `self`'s columns weighted
    /// by the components of `rhs.col[i]`.
    #[inline]
    fn mul(self, rhs: Mat4) -> Mat4 {
        let mut res = Mat4::ZERO;
        for (out, weights) in res.col.iter_mut().zip(rhs.col) {
            *out += self * weights;
        }
        res
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, v: Vec4) -> Vec4 {
        self.col[0] * v.x + self.col[1] * v.y + self.col[2] * v.z + self.col[3] * v.w
    }
}

/// Identity matrix: ones on the diagonal, zeros elsewhere.
#[inline]
pub const fn identity() -> Mat4 {
    Mat4::IDENTITY
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    fn m(values: [f32; 16]) -> Mat4 {
        bytemuck::cast(values)
    }

    fn sample_a() -> Mat4 {
        m([
            1.0, 2.0, 3.0, 4.0, //
            -1.5, 0.5, 2.0, 0.0, //
            0.25, -3.0, 1.0, 2.0, //
            7.0, 0.0, -2.0, 1.0,
        ])
    }

    fn sample_b() -> Mat4 {
        m([
            0.5, -1.0, 2.0, 0.0, //
            3.0, 1.0, 0.0, -2.0, //
            1.0, 1.0, 1.0, 1.0, //
            -4.0, 2.5, 0.5, 1.0,
        ])
    }

    fn sample_c() -> Mat4 {
        m([
            2.0, 0.0, -1.0, 0.5, //
            0.0, 1.5, 0.25, 0.0, //
            -2.0, 3.0, 1.0, -1.0, //
            1.0, 1.0, 0.0, 2.0,
        ])
    }

    fn assert_mat_approx(a: Mat4, b: Mat4, eps: f32) {
        for (x, y) in a.as_array().iter().zip(b.as_array()) {
            assert!(approx_eq!(f32, *x, *y, epsilon = eps), "{a:?}\n!=\n{b:?}");
        }
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn layout_is_sixteen_packed_floats() {
        assert_eq!(core::mem::size_of::<Mat4>(), 64);
        assert_eq!(core::mem::size_of::<Vec4>(), 16);
        assert_eq!(core::mem::size_of::<Vec3>(), 12);
        assert_eq!(Mat4::IDENTITY.as_bytes().len(), 64);
    }

    #[test]
    fn flat_view_is_column_major() {
        let t = Mat4::from_translation(Vec3::new(5.0, 6.0, 7.0));
        let flat = t.as_array();
        assert_eq!(&flat[12..16], &[5.0, 6.0, 7.0, 1.0]);
        assert_eq!(flat[0], t.col[0][0]);
        // row 2, column 1
        assert_eq!(sample_a().as_array()[6], sample_a().col[1][2]);
    }

    // ── identity ──────────────────────────────────────────────────────────

    #[test]
    fn identity_is_diagonal() {
        let i = identity();
        for c in 0..4 {
            for r in 0..4 {
                assert_eq!(i.col[c][r], if c == r { 1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    fn identity_is_neutral_on_both_sides() {
        for a in [sample_a(), sample_b(), sample_c()] {
            assert_eq!(identity() * a, a);
            assert_eq!(a * identity(), a);
        }
    }

    // ── product ───────────────────────────────────────────────────────────

    #[test]
    fn product_matches_row_times_column() {
        let a = sample_a();
        let b = sample_b();
        let p = a * b;
        for c in 0..4 {
            for r in 0..4 {
                let expected: f32 = (0..4).map(|k| a.col[k][r] * b.col[c][k]).sum();
                assert!(approx_eq!(f32, p.col[c][r], expected, epsilon = 1e-5));
            }
        }
    }

    #[test]
    fn product_is_associative() {
        let (a, b, c) = (sample_a(), sample_b(), sample_c());
        assert_mat_approx((a * b) * c, a * (b * c), 1e-3);
    }

    #[test]
    fn product_is_not_commutative() {
        assert_ne!(sample_a() * sample_b(), sample_b() * sample_a());
    }

    #[test]
    fn right_operand_applies_first() {
        let scale = Mat4::from_cols(
            Vec4::new(2.0, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 2.0, 0.0, 0.0),
            Vec4::new(0.0, 0.0, 2.0, 0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        );
        let shift = Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0));
        let p = Vec4::new(1.0, 1.0, 1.0, 1.0);

        // scale, then shift
        assert_eq!((shift * scale) * p, Vec4::new(3.0, 2.0, 2.0, 1.0));
        // shift, then scale
        assert_eq!((scale * shift) * p, Vec4::new(4.0, 2.0, 2.0, 1.0));
    }

    #[test]
    fn vector_product_agrees_with_matrix_product() {
        let a = sample_a();
        let b = sample_b();
        let v = Vec4::new(0.5, -1.0, 2.0, 1.0);
        let lhs = (a * b) * v;
        let rhs = a * (b * v);
        for (x, y) in lhs.as_array().iter().zip(rhs.as_array()) {
            assert!(approx_eq!(f32, *x, *y, epsilon = 1e-4));
        }
    }

    #[test]
    fn translation_moves_points_not_directions() {
        let t = Mat4::from_translation(Vec3::new(1.0, -2.0, 3.0));
        assert_eq!(t * Vec4::new(1.0, 1.0, 1.0, 1.0), Vec4::new(2.0, -1.0, 4.0, 1.0));
        assert_eq!(t * Vec4::new(1.0, 1.0, 1.0, 0.0), Vec4::new(1.0, 1.0, 1.0, 0.0));
    }
}
